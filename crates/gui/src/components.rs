// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! GUI components
//!

mod headlines;
mod selected_month;

pub use headlines::*;
pub use selected_month::*;

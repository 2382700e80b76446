// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! `egui` parts
//!

mod consts;
mod draw;
mod helpers;
mod label;
mod period_slider;

pub use consts::*;
pub use draw::*;
pub use helpers::*;
pub use label::*;
pub use period_slider::*;

// SPDX-License-Identifier: MIT

//!
//! *Part of the wider ELMR project*
//!
//! This crate defines the basic datatypes used across the ELMR dashboard
//! (period sliders, headline figures, the desktop GUI): calendar months,
//! analysis periods, month date formats, and source datasets.
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod dataset;
mod format;
mod headline;
mod month;
mod period;

pub use dataset::*;
pub use format::*;
pub use headline::*;
pub use month::*;
pub use period::*;

#[macro_use]
extern crate log;

// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider ELMR project*
//!
//! This library crate holds the period slider, which maps month offsets onto
//! the months of an analysis period, and the `egui` parts that the ELMR
//! desktop dashboard uses that other projects may also wish to use.
//!
//! The slider itself doesn't depend on `egui`: it drives any
//! [`SliderControl`] and any [`DisplaySlot`]s.
//!

mod egui;
mod slider;

pub use egui::*;
pub use slider::*;

#[macro_use]
extern crate log;

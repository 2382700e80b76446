// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider ELMR project*
//!
//! This library crate provides the GUI parts of the ELMR desktop dashboard:
//! period sliders over a source dataset and the headline figures for the
//! selected months.
//!

mod app;
mod components;
mod config;
mod consts;
mod error;

pub use app::ElmrApp;
pub use config::{Config, config_file_path};
pub use consts::DEFAULT_WINDOW_SIZE;
pub use error::GuiError;

#[macro_use]
extern crate log;

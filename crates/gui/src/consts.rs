// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Some configuration consts
//!

use eframe::egui::Color32;

pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

pub const DEFAULT_WINDOW_SIZE: WindowSize = WindowSize {
    width: 900.0,
    height: 500.0,
};

/// Colour for good news (e.g. falling unemployment)
pub const GOOD_NEWS_COLOUR: Color32 = Color32::from_rgb(60, 118, 61);

/// Colour for bad news (e.g. rising unemployment)
pub const BAD_NEWS_COLOUR: Color32 = Color32::from_rgb(169, 68, 66);

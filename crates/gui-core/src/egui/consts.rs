// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Some configuration consts
//!

/// Width of the read-only month fields under a period slider
pub static DISPLAY_FIELD_WIDTH: f32 = 70.0;

pub static TREND_UP_SYMBOL: &str = "⬆";
pub static TREND_DOWN_SYMBOL: &str = "⬇";

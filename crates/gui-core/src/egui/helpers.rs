// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Layout helpers
//!

use eframe::egui::Ui;

/// Layout helper function (shortcut for `ui.spacing().item_spacing.x`)
pub fn widget_x_spacing(ui: &mut Ui) -> f32 {
    ui.spacing().item_spacing.x
}

/// Layout helper function (shortcut for `ui.spacing().item_spacing.y`)
pub fn widget_y_spacing(ui: &mut Ui) -> f32 {
    ui.spacing().item_spacing.y
}

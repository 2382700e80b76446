// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The month picked on the single value slider
//!

use eframe::egui::{Context, Ui};
use elmr_gui_core::{Draw, Label, PeriodSlider};

/// Follows the month slider: the label tracks every slide, while the month
/// that data is shown for only moves once the slider is let go
#[derive(Debug, Default)]
pub struct SelectedMonthGui {
    /// Updated on slide
    sliding_label: String,

    /// Updated on change (the column key a map would be drawn for)
    committed: String,
}

impl SelectedMonthGui {
    /// Catch up with the slider without treating it as a change
    pub fn follow(&mut self, slider: &PeriodSlider) {
        self.sliding_label = slider.current_date_string();
        self.committed = self.sliding_label.clone();
    }

    pub fn on_slide(&mut self, slider: &PeriodSlider) {
        self.sliding_label = slider.current_date_string();
    }

    pub fn on_change(&mut self, slider: &PeriodSlider) {
        self.committed = slider.current_date_string();
        info!("Showing data for {}", self.committed);
    }

    pub fn sliding_label(&self) -> &str {
        &self.sliding_label
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }
}

impl Draw for SelectedMonthGui {
    fn draw(&mut self, _ctx: &Context, ui: &mut Ui) {
        ui.horizontal(|ui| {
            Label::strong(ui, "Month");
            ui.label(self.sliding_label.as_str());
        });
        ui.horizontal(|ui| {
            Label::strong(ui, "Showing data for");
            ui.label(self.committed.as_str());
        });
    }
}

#[cfg(test)]
mod test {
    use super::SelectedMonthGui;
    use elmr_core::YearMonth;
    use elmr_gui_core::{PeriodSlider, PeriodSliderConfig, SliderPosition};
    use elmr_macros::year_month;

    #[test]
    fn slide_then_commit() {
        let start: YearMonth = year_month!(2000, 1);
        let mut slider = PeriodSlider::headless(
            PeriodSliderConfig::single(start, year_month!(2015, 2)),
            vec![],
        )
        .unwrap();
        let mut selected = SelectedMonthGui::default();
        selected.follow(&slider);
        assert_eq!(selected.committed(), "Feb 2015");

        slider.slide(SliderPosition::Single(18)).unwrap();
        selected.on_slide(&slider);
        assert_eq!(selected.sliding_label(), "Jul 2001");
        assert_eq!(selected.committed(), "Feb 2015");

        slider.change(SliderPosition::Single(18)).unwrap();
        selected.on_change(&slider);
        assert_eq!(selected.committed(), "Jul 2001");
    }
}

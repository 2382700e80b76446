// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Drawing a period slider with `egui`
//!

use crate::{Draw, Label, PeriodSlider, SliderPosition, widget_x_spacing};
use eframe::egui::{Context, Response, Slider, TextEdit, Ui};

/// What the user did to a handle this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interaction {
    None,

    /// Being dragged
    Sliding,

    /// Drag released
    Released,

    /// Moved in one go (click on the rail, arrow keys)
    Stepped,
}

impl Interaction {
    fn from_response(response: &Response) -> Self {
        Self::from_flags(
            response.drag_stopped(),
            response.dragged(),
            response.changed(),
        )
    }

    /// A drag that stops is a release (even if it moved the handle on its last
    /// frame), a drag that moves the handle is a slide, and a move without a
    /// drag is a step
    fn from_flags(drag_stopped: bool, dragged: bool, changed: bool) -> Self {
        match (drag_stopped, dragged, changed) {
            (true, _, _) => Self::Released,
            (false, true, true) => Self::Sliding,
            (false, true, false) => Self::None,
            (false, false, true) => Self::Stepped,
            (false, false, false) => Self::None,
        }
    }

    /// Combine the interactions of two handles (only one can be in use)
    fn or(self, other: Self) -> Self {
        if self == Self::None { other } else { self }
    }
}

/// A [`PeriodSlider`] drawn as one or two `egui` sliders with read-only
/// display fields underneath.
///
/// Dragging fires slide events, letting go of a handle fires a change event,
/// and clicks/keyboard steps fire both.
#[derive(Debug)]
pub struct PeriodSliderGui {
    label: String,
    slider: PeriodSlider,
    display_labels: Vec<String>,
}

impl PeriodSliderGui {
    pub fn new(label: &str, slider: PeriodSlider) -> Self {
        let display_labels = match slider.display_count() {
            2 => vec![String::from("Start"), String::from("End")],
            count => (0..count).map(|_| String::from("Month")).collect(),
        };
        Self {
            label: label.to_string(),
            slider,
            display_labels,
        }
    }

    pub fn slider(&self) -> &PeriodSlider {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut PeriodSlider {
        &mut self.slider
    }

    /// Draw the handles and return what was requested & how
    fn draw_handles(&self, ui: &mut Ui) -> (SliderPosition, Interaction) {
        let max = self.slider.length();
        match self.slider.position() {
            SliderPosition::Single(mut value) => {
                let response = ui.add(Slider::new(&mut value, 0..=max).show_value(false));
                (
                    SliderPosition::Single(value),
                    Interaction::from_response(&response),
                )
            }
            SliderPosition::Range(mut start, mut end) => {
                let start_response = ui.add(Slider::new(&mut start, 0..=max).show_value(false));
                let end_response = ui.add(Slider::new(&mut end, 0..=max).show_value(false));
                let interaction = Interaction::from_response(&start_response)
                    .or(Interaction::from_response(&end_response));
                (SliderPosition::Range(start, end), interaction)
            }
        }
    }

    fn handle(&mut self, requested: SliderPosition, interaction: Interaction) {
        let result = match interaction {
            Interaction::None => return,
            Interaction::Sliding => self.slider.slide(requested),
            Interaction::Released => self.slider.change(requested),
            Interaction::Stepped => self
                .slider
                .slide(requested)
                .and_then(|_| self.slider.change(requested)),
        };
        if let Err(error) = result {
            warn!("{} slider: {error}", self.label);
        }
    }

    fn draw_displays(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            for (index, label) in self.display_labels.iter().enumerate() {
                if index > 0 {
                    let spacing = widget_x_spacing(ui);
                    ui.add_space(spacing);
                }
                let mut text = self
                    .slider
                    .display_value(index)
                    .map(|value| value.text.clone())
                    .unwrap_or_default();
                Label::weak(ui, label);
                ui.add(
                    TextEdit::singleline(&mut text)
                        .interactive(false)
                        .desired_width(crate::DISPLAY_FIELD_WIDTH),
                );
            }
        });
    }
}

impl Draw for PeriodSliderGui {
    fn draw(&mut self, _ctx: &Context, ui: &mut Ui) {
        ui.vertical(|ui| {
            Label::sub_heading(ui, &self.label);
            let (requested, interaction) = self.draw_handles(ui);
            self.handle(requested, interaction);
            self.draw_displays(ui);
        });
    }
}

#[cfg(test)]
mod test {
    use super::{Interaction, PeriodSliderGui};
    use crate::{
        DisplayField, DisplaySlot, Draw, PeriodSlider, PeriodSliderConfig, SliderPosition,
    };
    use eframe::egui::{CentralPanel, Context, RawInput};
    use elmr_core::YearMonth;
    use elmr_macros::year_month;

    #[test]
    fn or_prefers_the_active_handle() {
        assert_eq!(Interaction::None.or(Interaction::Sliding), Interaction::Sliding);
        assert_eq!(Interaction::Released.or(Interaction::None), Interaction::Released);
        assert_eq!(Interaction::None.or(Interaction::None), Interaction::None);
    }

    #[test]
    fn gestures() {
        // (drag_stopped, dragged, changed)
        assert_eq!(Interaction::from_flags(false, true, true), Interaction::Sliding);
        assert_eq!(Interaction::from_flags(false, true, false), Interaction::None);
        assert_eq!(Interaction::from_flags(true, false, false), Interaction::Released);
        assert_eq!(Interaction::from_flags(true, false, true), Interaction::Released);
        assert_eq!(Interaction::from_flags(false, false, true), Interaction::Stepped);
        assert_eq!(Interaction::from_flags(false, false, false), Interaction::None);
    }

    #[test]
    fn stepping_fires_slide_then_change() {
        let start: YearMonth = year_month!(2000, 1);
        let slider = PeriodSlider::headless(
            PeriodSliderConfig::single(start, year_month!(2015, 2)),
            vec![],
        )
        .unwrap();
        let mut gui = PeriodSliderGui::new("Month", slider);
        gui.handle(SliderPosition::Single(18), Interaction::Stepped);
        assert_eq!(gui.slider().current_date_string(), "Jul 2001");

        // Nothing happens without an interaction
        gui.handle(SliderPosition::Single(3), Interaction::None);
        assert_eq!(gui.slider().current(), 18);

        // Wrong shapes are logged, not applied
        gui.handle(SliderPosition::Range(0, 1), Interaction::Released);
        assert_eq!(gui.slider().current(), 18);
    }

    #[test]
    fn draws_without_input() {
        let start: YearMonth = year_month!(2000, 1);
        let slider = PeriodSlider::headless(
            PeriodSliderConfig::range(start, year_month!(2015, 2)),
            vec![
                Box::new(DisplayField::new()) as Box<dyn DisplaySlot>,
                Box::new(DisplayField::new()),
            ],
        )
        .unwrap();
        let mut gui = PeriodSliderGui::new("Period", slider);

        let ctx = Context::default();
        let _ = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| gui.draw(ctx, ui));
        });
        assert_eq!(gui.slider().range(), Some((0, 181)));
        assert_eq!(gui.display_labels, vec!["Start", "End"]);
    }
}

// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! ELMR egui desktop dashboard
//!

use crate::components::{HeadlinesGui, SelectedMonthGui};
use crate::{Config, GuiError};
use eframe::App;
use eframe::egui::{CentralPanel, Context, ScrollArea, SidePanel, Ui};
use elmr_core::SourceDataset;
use elmr_gui_core::{
    BoundedControl, DisplayField, DisplaySlot, Draw, Label, PeriodSlider, PeriodSliderGui,
    SliderCallbacks, SliderEvent, SliderMode, widget_y_spacing,
};
use std::cell::RefCell;
use std::fs::File;
use std::io::BufReader;
use std::rc::Rc;

/// The dashboard: a month slider, a range slider and the headline figures for
/// the selected range
#[derive(Debug)]
pub struct ElmrApp {
    dataset: Option<Rc<SourceDataset>>,
    month_slider: PeriodSliderGui,
    range_slider: PeriodSliderGui,
    selected_month: Rc<RefCell<SelectedMonthGui>>,
    headlines: Rc<RefCell<HeadlinesGui>>,
}

impl ElmrApp {
    /// Build the dashboard from a config, loading its dataset (if any)
    pub fn new(mut config: Config) -> Result<Self, GuiError> {
        let dataset = match &config.dataset_path {
            Some(path) => {
                info!("Loading dataset from {path:?}");
                let reader = BufReader::new(File::open(path)?);
                Some(Rc::new(SourceDataset::from_reader(reader)?))
            }
            None => None,
        };
        if let Some(dataset) = &dataset {
            config.restrict_to_period(dataset.period());
        }
        Self::with_dataset(config, dataset)
    }

    /// Build the dashboard around an already loaded dataset
    pub fn with_dataset(
        mut config: Config,
        dataset: Option<Rc<SourceDataset>>,
    ) -> Result<Self, GuiError> {
        config.month_slider.mode = SliderMode::Single;
        config.range_slider.mode = SliderMode::Range;

        // Month slider: labels follow every slide, data follows on release
        let selected_month = Rc::new(RefCell::new(SelectedMonthGui::default()));
        let month_callbacks = SliderCallbacks::new()
            .on_slide({
                let selected_month = Rc::clone(&selected_month);
                move |_: &SliderEvent, slider: &mut PeriodSlider| {
                    selected_month.borrow_mut().on_slide(slider)
                }
            })
            .on_change({
                let selected_month = Rc::clone(&selected_month);
                move |_: &SliderEvent, slider: &mut PeriodSlider| {
                    selected_month.borrow_mut().on_change(slider)
                }
            });
        let month_slider = PeriodSlider::new(
            config.month_slider,
            Box::new(BoundedControl::new()),
            display_fields(1),
            month_callbacks,
        )?;
        selected_month.borrow_mut().follow(&month_slider);

        // Range slider: headlines are recomputed once a handle is let go
        let headlines = Rc::new(RefCell::new(HeadlinesGui::new(
            dataset.clone(),
            config.indicators,
        )));
        let range_callbacks = SliderCallbacks::new().on_change({
            let headlines = Rc::clone(&headlines);
            move |_: &SliderEvent, slider: &mut PeriodSlider| {
                headlines.borrow_mut().update_from_slider(slider)
            }
        });
        let range_slider = PeriodSlider::new(
            config.range_slider,
            Box::new(BoundedControl::new()),
            display_fields(2),
            range_callbacks,
        )?;
        headlines.borrow_mut().update_from_slider(&range_slider);

        Ok(Self {
            dataset,
            month_slider: PeriodSliderGui::new("Month", month_slider),
            range_slider: PeriodSliderGui::new("Period", range_slider),
            selected_month,
            headlines,
        })
    }

    pub fn month_slider(&self) -> &PeriodSlider {
        self.month_slider.slider()
    }

    pub fn range_slider(&self) -> &PeriodSlider {
        self.range_slider.slider()
    }

    fn draw_side_panel(&mut self, _ctx: &Context, ui: &mut Ui) {
        Label::heading(ui, "ELMR");
        ui.separator();
        let Some(dataset) = &self.dataset else {
            Label::description(ui, "No dataset loaded");
            return;
        };
        Label::strong(ui, dataset.title());
        Label::weak(ui, &format!("Version {}", dataset.version()));
        let period = dataset.period();
        ui.label(format!("{} to {}", period.start(), period.end()));
        let spacing = widget_y_spacing(ui);
        ui.add_space(spacing);

        Label::sub_heading(ui, "Series");
        ScrollArea::vertical().show(ui, |ui| {
            let mut ids: Vec<&str> = dataset
                .records()
                .first()
                .map(|record| record.series_ids().collect())
                .unwrap_or_default();
            ids.sort_unstable();
            for id in ids {
                ui.horizontal(|ui| {
                    Label::strong(ui, id);
                    ui.label(dataset.description(id).unwrap_or(""));
                });
            }
        });
    }

    fn draw_central_panel(&mut self, ctx: &Context, ui: &mut Ui) {
        self.month_slider.draw(ctx, ui);
        self.selected_month.borrow_mut().draw(ctx, ui);
        ui.separator();
        self.range_slider.draw(ctx, ui);
        let spacing = widget_y_spacing(ui);
        ui.add_space(spacing);
        self.headlines.borrow_mut().draw(ctx, ui);
    }
}

/// Display slots for a slider
fn display_fields(count: usize) -> Vec<Box<dyn DisplaySlot>> {
    (0..count)
        .map(|_| Box::new(DisplayField::new()) as Box<dyn DisplaySlot>)
        .collect()
}

impl App for ElmrApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Draw the side panel
        SidePanel::left("sidebar").show(ctx, |ui| {
            self.draw_side_panel(ctx, ui);
        });

        // Draw the main central panel
        CentralPanel::default().show(ctx, |ui| {
            self.draw_central_panel(ctx, ui);
        });
    }
}

#[cfg(test)]
mod test {
    use super::ElmrApp;
    use crate::Config;
    use elmr_core::{SourceDataset, YearMonth};
    use eframe::egui::{CentralPanel, Context, RawInput, SidePanel};
    use elmr_gui_core::SliderPosition;
    use elmr_macros::year_month;
    use std::rc::Rc;

    const JSON: &str = r#"{
        "title": "ELMR Ingested CPS Data",
        "period": {"start": "Jan 2000", "end": "Apr 2000"},
        "data": [
            {"DATE": "Jan 2000", "LNS14000000": 4.0, "LNS12000000": 136559},
            {"DATE": "Feb 2000", "LNS14000000": 4.1, "LNS12000000": 136598},
            {"DATE": "Mar 2000", "LNS14000000": 4.0, "LNS12000000": 136701},
            {"DATE": "Apr 2000", "LNS14000000": 3.8, "LNS12000000": 137270}
        ]
    }"#;

    fn app() -> ElmrApp {
        let dataset = SourceDataset::from_json(JSON).unwrap();
        let mut config = Config::default();
        config.restrict_to_period(dataset.period());
        ElmrApp::with_dataset(config, Some(Rc::new(dataset))).unwrap()
    }

    #[test]
    fn sliders_cover_the_dataset_period() {
        let app = app();
        let end: YearMonth = year_month!(2000, 4);
        assert_eq!(app.month_slider().period().end(), end);
        assert_eq!(app.month_slider().current(), 3);

        // The 18 month default window is cut to the period
        assert_eq!(app.range_slider().range(), Some((0, 3)));
        assert_eq!(app.headlines.borrow().headlines().len(), 2);
    }

    #[test]
    fn range_change_recomputes_headlines() {
        let mut app = app();
        let before = app.headlines.borrow().headlines()[0].clone().unwrap();
        assert_eq!(before.current, 3.8);

        // Programmatic moves are silent
        app.range_slider
            .slider_mut()
            .set_position(SliderPosition::Range(0, 1))
            .unwrap();
        assert_eq!(app.headlines.borrow().headlines()[0].clone().unwrap(), before);

        app.range_slider
            .slider_mut()
            .change(SliderPosition::Range(0, 1))
            .unwrap();
        let after = app.headlines.borrow().headlines()[0].clone().unwrap();
        assert_eq!(after.current, 4.1);
    }

    #[test]
    fn draws_both_panels() {
        let mut app = app();
        let ctx = Context::default();
        let _ = ctx.run(RawInput::default(), |ctx| {
            SidePanel::left("sidebar").show(ctx, |ui| app.draw_side_panel(ctx, ui));
            CentralPanel::default().show(ctx, |ui| app.draw_central_panel(ctx, ui));
        });
        assert_eq!(app.range_slider().range(), Some((0, 3)));
        assert_eq!(app.selected_month.borrow().committed(), "Apr 2000");
    }

    #[test]
    fn month_slide_only_moves_the_label() {
        let mut app = app();
        app.month_slider
            .slider_mut()
            .slide(SliderPosition::Single(1))
            .unwrap();
        assert_eq!(app.selected_month.borrow().sliding_label(), "Feb 2000");
        assert_eq!(app.selected_month.borrow().committed(), "Apr 2000");
    }
}

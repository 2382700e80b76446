// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Headline figures for the months selected on the range slider
//!

use crate::consts::{BAD_NEWS_COLOUR, GOOD_NEWS_COLOUR};
use eframe::egui::{Context, Ui};
use elmr_core::{Headline, HeadlineError, Indicator, Outlook, SourceDataset, Trend};
use elmr_gui_core::{Draw, Label, PeriodSlider, TREND_DOWN_SYMBOL, TREND_UP_SYMBOL};
use std::rc::Rc;

/// The headline figures of each indicator over the selected range
#[derive(Debug)]
pub struct HeadlinesGui {
    dataset: Option<Rc<SourceDataset>>,
    indicators: Vec<Indicator>,
    headlines: Vec<Result<Headline, HeadlineError>>,
}

impl HeadlinesGui {
    pub fn new(dataset: Option<Rc<SourceDataset>>, indicators: Vec<Indicator>) -> Self {
        Self {
            dataset,
            indicators,
            headlines: Vec::new(),
        }
    }

    /// Recompute from the months shown by a range slider's two displays
    pub fn update_from_slider(&mut self, slider: &PeriodSlider) {
        match (slider.position_of_display(0), slider.position_of_display(1)) {
            (Some(start), Some(end)) => self.update(start, end),
            _ => warn!("Headlines need a slider with two displays"),
        }
    }

    /// Recompute for the month offsets `start` to `end`
    pub fn update(&mut self, start: u32, end: u32) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        debug!("Updating headlines for {start}..={end}");
        self.headlines = self
            .indicators
            .iter()
            .map(|indicator| Headline::compute(dataset, indicator, start, end))
            .collect();
    }

    pub fn headlines(&self) -> &[Result<Headline, HeadlineError>] {
        &self.headlines
    }
}

impl Draw for HeadlinesGui {
    fn draw(&mut self, _ctx: &Context, ui: &mut Ui) {
        if self.dataset.is_none() {
            Label::none(ui);
            return;
        }
        ui.horizontal(|ui| {
            for (indicator, headline) in self.indicators.iter().zip(self.headlines.iter()) {
                ui.vertical(|ui| {
                    Label::strong(ui, &indicator.label);
                    match headline {
                        Ok(headline) => {
                            Label::heading(ui, &headline.value_text());
                            let symbol = match headline.trend {
                                Trend::Up => TREND_UP_SYMBOL,
                                Trend::Down => TREND_DOWN_SYMBOL,
                            };
                            let colour = match headline.outlook {
                                Outlook::Good => GOOD_NEWS_COLOUR,
                                Outlook::Bad => BAD_NEWS_COLOUR,
                            };
                            Label::coloured(
                                ui,
                                &format!("{symbol} {}", headline.delta_text()),
                                colour,
                            );
                        }
                        Err(error) => {
                            Label::weak(ui, &error.to_string());
                        }
                    }
                });
                ui.separator();
            }
        });
    }
}

#[cfg(test)]
mod test {
    use super::HeadlinesGui;
    use elmr_core::{Indicator, SourceDataset, Trend};
    use elmr_gui_core::{
        DisplayField, DisplaySlot, PeriodSlider, PeriodSliderConfig, SliderPosition,
    };
    use std::rc::Rc;

    const JSON: &str = r#"{
        "period": {"start": "Jan 2000", "end": "Mar 2000"},
        "data": [
            {"DATE": "Jan 2000", "LNS14000000": 4.0, "LNS12000000": 136559},
            {"DATE": "Feb 2000", "LNS14000000": 4.1, "LNS12000000": 136598},
            {"DATE": "Mar 2000", "LNS14000000": 4.0, "LNS12000000": 136701}
        ]
    }"#;

    #[test]
    fn follows_the_range_slider_displays() {
        let dataset = Rc::new(SourceDataset::from_json(JSON).unwrap());
        let mut headlines = HeadlinesGui::new(
            Some(Rc::clone(&dataset)),
            vec![Indicator::unemployment_rate(), Indicator::employment_level()],
        );
        let period = dataset.period();
        let mut slider = PeriodSlider::headless(
            PeriodSliderConfig::range(period.start(), period.end()),
            vec![
                Box::new(DisplayField::new()) as Box<dyn DisplaySlot>,
                Box::new(DisplayField::new()),
            ],
        )
        .unwrap();

        slider.set_position(SliderPosition::Range(0, 1)).unwrap();
        headlines.update_from_slider(&slider);
        let unemployment = headlines.headlines()[0].as_ref().unwrap();
        assert_eq!(unemployment.current, 4.1);
        assert_eq!(unemployment.trend, Trend::Up);

        slider.set_position(SliderPosition::Range(1, 2)).unwrap();
        headlines.update_from_slider(&slider);
        let employment = headlines.headlines()[1].as_ref().unwrap();
        assert_eq!(employment.delta, 103.0);
    }

    #[test]
    fn no_dataset_no_headlines() {
        let mut headlines = HeadlinesGui::new(None, vec![Indicator::unemployment_rate()]);
        headlines.update(0, 1);
        assert!(headlines.headlines().is_empty());
    }
}

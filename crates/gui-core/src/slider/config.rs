// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Period slider configuration
//!

use elmr_core::{DateFormat, YearMonth};
use serde::{Deserialize, Serialize};

/// Whether a slider has one handle or two
#[derive(derive_more::Display, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SliderMode {
    /// One handle, one value
    #[default]
    #[display("single-value")]
    Single,

    /// Two handles, a `(start, end)` pair
    #[display("range")]
    Range,
}

/// Where the handles of a slider sit, as month offsets from the start of the
/// period
///
/// Serialised as a bare number (single) or a two element array (range).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum SliderPosition {
    Single(u32),
    Range(u32, u32),
}

impl SliderPosition {
    /// The mode a slider must be in to hold this position
    pub fn mode(&self) -> SliderMode {
        match self {
            Self::Single(_) => SliderMode::Single,
            Self::Range(_, _) => SliderMode::Range,
        }
    }

    /// The rightmost handle
    pub fn end(&self) -> u32 {
        match *self {
            Self::Single(value) => value,
            Self::Range(_, end) => end,
        }
    }
}

/// The window a range slider starts on when no initial position is given
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DefaultWindow {
    /// `[0, length]`
    #[default]
    FullPeriod,

    /// `[length - n, length]`, starting no earlier than the period start
    LastMonths(u32),
}

impl DefaultWindow {
    /// The `(start, end)` handles for a period of `length` months
    pub fn handles(&self, length: u32) -> (u32, u32) {
        match *self {
            Self::FullPeriod => (0, length),
            Self::LastMonths(months) => (length.saturating_sub(months), length),
        }
    }
}

/// Everything needed to build a [`crate::PeriodSlider`] (apart from its
/// bindings and callbacks)
///
/// Every field has a default, so a config file need only give the fields it
/// changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PeriodSliderConfig {
    /// First month of the period (default Jan 2000)
    pub min_date: YearMonth,

    /// Last month of the period (`None` = the current month, read when the
    /// slider is built)
    pub max_date: Option<YearMonth>,

    /// Single value or range (default single value)
    pub mode: SliderMode,

    /// How months are written to the displays (default `MMM YYYY`)
    pub date_format: DateFormat,

    /// Starting handle position(s).  When `None`, a single value slider starts
    /// on the last month and a range slider on `default_window`
    pub initial: Option<SliderPosition>,

    /// Starting window for range sliders without an `initial` position
    pub default_window: DefaultWindow,
}

impl Default for PeriodSliderConfig {
    fn default() -> Self {
        Self {
            min_date: YearMonth::default(),
            max_date: None,
            mode: SliderMode::default(),
            date_format: DateFormat::default(),
            initial: None,
            default_window: DefaultWindow::default(),
        }
    }
}

impl PeriodSliderConfig {
    /// A single value slider over `min_date..=max_date`
    pub fn single(min_date: YearMonth, max_date: YearMonth) -> Self {
        Self {
            min_date,
            max_date: Some(max_date),
            ..Self::default()
        }
    }

    /// A range slider over `min_date..=max_date`
    pub fn range(min_date: YearMonth, max_date: YearMonth) -> Self {
        Self {
            min_date,
            max_date: Some(max_date),
            mode: SliderMode::Range,
            ..Self::default()
        }
    }

    /// Set the initial position
    pub fn with_initial(mut self, initial: SliderPosition) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Set the default window of a range slider
    pub fn with_default_window(mut self, window: DefaultWindow) -> Self {
        self.default_window = window;
        self
    }

    /// Set the display date format
    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }
}

#[cfg(test)]
mod test {
    use super::{DefaultWindow, PeriodSliderConfig, SliderMode, SliderPosition};
    use elmr_core::YearMonth;
    use elmr_macros::year_month;

    #[test]
    fn default_window_handles() {
        assert_eq!(DefaultWindow::FullPeriod.handles(181), (0, 181));
        assert_eq!(DefaultWindow::LastMonths(18).handles(181), (163, 181));
        assert_eq!(DefaultWindow::LastMonths(18).handles(10), (0, 10));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: PeriodSliderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PeriodSliderConfig::default());
        assert_eq!(config.min_date, year_month!(2000, 1));
        assert_eq!(config.max_date, None);

        let json = r#"{
            "min_date": "Jan 2000",
            "max_date": "Feb 2015",
            "mode": "range",
            "date_format": "YYYY-MM",
            "initial": [0, 18],
            "default_window": {"last_months": 18}
        }"#;
        let config: PeriodSliderConfig = serde_json::from_str(json).unwrap();
        let max: YearMonth = year_month!(2015, 2);
        assert_eq!(config.max_date, Some(max));
        assert_eq!(config.mode, SliderMode::Range);
        assert_eq!(config.date_format.pattern(), "YYYY-MM");
        assert_eq!(config.initial, Some(SliderPosition::Range(0, 18)));
        assert_eq!(config.default_window, DefaultWindow::LastMonths(18));
    }

    #[test]
    fn positions() {
        let single: SliderPosition = serde_json::from_str("42").unwrap();
        assert_eq!(single, SliderPosition::Single(42));
        assert_eq!(single.mode(), SliderMode::Single);
        assert_eq!(SliderPosition::Range(3, 9).end(), 9);
        assert_eq!(serde_json::to_string(&SliderPosition::Range(3, 9)).unwrap(), "[3,9]");
    }
}

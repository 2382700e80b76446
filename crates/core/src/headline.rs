// SPDX-License-Identifier: MIT

//!
//! Headline figures: the latest value of an indicator and how it moved over a
//! selected range of months
//!

use crate::SourceDataset;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decimal places percentage deltas are rounded to
const PERCENT_DELTA_PLACES: i32 = 3;

/// Errors that can arise when computing a [`Headline`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeadlineError {
    /// There is no record for the month offset
    #[error("No record at month offset {0}")]
    NoRecord(u32),

    /// The record exists but doesn't hold a value for the series
    #[error("No value for series `{series_id}` at month offset {offset}")]
    MissingValue { series_id: String, offset: u32 },
}

/// Whether a rise in the indicator is good or bad news
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// How the indicator's values are shown
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Already a percentage, e.g. 5.5 -> "5.5%"
    Percent,

    /// A count shown in thousands, e.g. 146,000 -> "146K"
    Thousands,
}

/// A series that headlines are computed for
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub series_id: String,
    pub label: String,
    pub polarity: Polarity,
    pub unit: Unit,
}

impl Indicator {
    /// The civilian unemployment rate (CPS `LNS14000000`)
    pub fn unemployment_rate() -> Self {
        Self {
            series_id: String::from("LNS14000000"),
            label: String::from("Unemployment Rate"),
            polarity: Polarity::LowerIsBetter,
            unit: Unit::Percent,
        }
    }

    /// The civilian employment level (CPS `LNS12000000`)
    pub fn employment_level() -> Self {
        Self {
            series_id: String::from("LNS12000000"),
            label: String::from("Employment Level"),
            polarity: Polarity::HigherIsBetter,
            unit: Unit::Thousands,
        }
    }
}

/// Direction of movement over the range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,

    /// Includes no change
    Down,
}

/// Whether the movement is good or bad news given the indicator's polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    Good,
    Bad,
}

/// An indicator's value at the end of a range and its change since the start
#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub current: f64,
    pub delta: f64,
    pub trend: Trend,
    pub outlook: Outlook,
    pub unit: Unit,
}

impl Headline {
    /// Compute the headline for the months `start` to `end` (offsets into the
    /// dataset's period, e.g. the positions of a range slider's two displays)
    pub fn compute(
        dataset: &SourceDataset,
        indicator: &Indicator,
        start: u32,
        end: u32,
    ) -> Result<Self, HeadlineError> {
        let start_value = lookup(dataset, indicator, start)?;
        let current = lookup(dataset, indicator, end)?;

        let mut delta = current - start_value;
        if indicator.unit == Unit::Percent {
            delta = round_to_places(delta, PERCENT_DELTA_PLACES);
        }

        let trend = if delta > 0.0 { Trend::Up } else { Trend::Down };
        let outlook = match (trend, indicator.polarity) {
            (Trend::Up, Polarity::HigherIsBetter) | (Trend::Down, Polarity::LowerIsBetter) => {
                Outlook::Good
            }
            _ => Outlook::Bad,
        };
        debug!(
            "Headline for {} over {start}..={end}: {current} ({delta:+})",
            indicator.series_id
        );

        Ok(Self {
            current,
            delta,
            trend,
            outlook,
            unit: indicator.unit,
        })
    }

    /// e.g. "4.1%" or "137K"
    pub fn value_text(&self) -> String {
        match self.unit {
            Unit::Percent => format!("{}%", self.current),
            Unit::Thousands => format!("{}K", (self.current / 1000.0).round()),
        }
    }

    /// The unsigned size of the change, e.g. "0.125%" or "381"
    pub fn delta_text(&self) -> String {
        match self.unit {
            Unit::Percent => format!("{}%", self.delta.abs()),
            Unit::Thousands => format!("{}", self.delta.abs()),
        }
    }
}

fn lookup(
    dataset: &SourceDataset,
    indicator: &Indicator,
    offset: u32,
) -> Result<f64, HeadlineError> {
    let record = dataset
        .records()
        .get(offset as usize)
        .ok_or(HeadlineError::NoRecord(offset))?;
    record
        .value(&indicator.series_id)
        .ok_or_else(|| HeadlineError::MissingValue {
            series_id: indicator.series_id.clone(),
            offset,
        })
}

fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod test {
    use super::{Headline, HeadlineError, Indicator, Outlook, Trend};
    use crate::dataset::test::cps_dataset;

    #[test]
    fn unemployment_falling_is_good() {
        let dataset = cps_dataset();
        let headline =
            Headline::compute(&dataset, &Indicator::unemployment_rate(), 1, 3).unwrap();
        assert_eq!(headline.current, 3.8);
        assert_eq!(headline.delta, -0.3);
        assert_eq!(headline.trend, Trend::Down);
        assert_eq!(headline.outlook, Outlook::Good);
        assert_eq!(headline.value_text(), "3.8%");
        assert_eq!(headline.delta_text(), "0.3%");
    }

    #[test]
    fn unchanged_counts_as_down() {
        let dataset = cps_dataset();
        let headline =
            Headline::compute(&dataset, &Indicator::unemployment_rate(), 0, 2).unwrap();
        assert_eq!(headline.delta, 0.0);
        assert_eq!(headline.trend, Trend::Down);
        assert_eq!(headline.outlook, Outlook::Good);
    }

    #[test]
    fn employment_rising_is_good() {
        let dataset = cps_dataset();
        let headline = Headline::compute(&dataset, &Indicator::employment_level(), 0, 5).unwrap();
        assert_eq!(headline.delta, 381.0);
        assert_eq!(headline.trend, Trend::Up);
        assert_eq!(headline.outlook, Outlook::Good);
        assert_eq!(headline.value_text(), "137K");
        assert_eq!(headline.delta_text(), "381");

        let headline = Headline::compute(&dataset, &Indicator::employment_level(), 3, 4).unwrap();
        assert_eq!(headline.trend, Trend::Down);
        assert_eq!(headline.outlook, Outlook::Bad);
    }

    #[test]
    fn errors() {
        let dataset = cps_dataset();
        assert_eq!(
            Headline::compute(&dataset, &Indicator::unemployment_rate(), 0, 6),
            Err(HeadlineError::NoRecord(6))
        );
        let mut missing = Indicator::employment_level();
        missing.series_id = String::from("LNS00000000");
        assert_eq!(
            Headline::compute(&dataset, &missing, 0, 1),
            Err(HeadlineError::MissingValue {
                series_id: String::from("LNS00000000"),
                offset: 0
            })
        );
    }
}

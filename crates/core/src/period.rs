// SPDX-License-Identifier: MIT

//!
//! Analysis periods
//!

use crate::YearMonth;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`Period`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    /// The start of the period is after its end
    #[error("The period start `{start}` is after its end `{end}`")]
    Inverted { start: YearMonth, end: YearMonth },
}

/// A bounded run of calendar months.  Both ends are included.
///
/// A [`Period`] can't be constructed with `start > end`, so the length is
/// never negative.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    start: YearMonth,
    end: YearMonth,
}

impl Period {
    /// Create a new [`Period`] if `start <= end`
    pub fn new(start: YearMonth, end: YearMonth) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// The first month of the period
    pub fn start(&self) -> YearMonth {
        self.start
    }

    /// The last month of the period
    pub fn end(&self) -> YearMonth {
        self.end
    }

    /// The number of months from the start to the end (a single month period
    /// has a length of 0)
    pub fn length(&self) -> u32 {
        // Non-negative and within u32 by construction (years are bounded)
        self.start.months_until(&self.end) as u32
    }

    /// Whether the month falls within the period
    pub fn contains(&self, date: &YearMonth) -> bool {
        (self.start..=self.end).contains(date)
    }

    /// The month `offset` months after the start.  Not bounded by the period.
    pub fn month_at(&self, offset: i64) -> YearMonth {
        self.start.add_months(offset)
    }

    /// The offset of the month from the start, or `None` if the month is not
    /// in the period
    pub fn offset_of(&self, date: &YearMonth) -> Option<u32> {
        self.contains(date)
            .then(|| self.start.months_until(date) as u32)
    }

    /// Iterate over every month in the period, in order
    pub fn months(&self) -> impl Iterator<Item = YearMonth> + '_ {
        (0..=i64::from(self.length())).map(move |offset| self.month_at(offset))
    }
}

#[derive(Deserialize)]
struct RawPeriod {
    start: YearMonth,
    end: YearMonth,
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawPeriod::deserialize(deserializer)?;
        Period::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::{Period, PeriodError};
    use crate::YearMonth;
    use elmr_macros::year_month;

    fn jan_2000_to_feb_2015() -> Period {
        Period::new(year_month!(2000, 1), year_month!(2015, 2)).unwrap()
    }

    #[test]
    fn new() {
        assert!(Period::new(year_month!(2000, 1), year_month!(2000, 1)).is_ok());
        assert_eq!(
            Period::new(year_month!(2000, 2), year_month!(2000, 1)),
            Err(PeriodError::Inverted {
                start: year_month!(2000, 2),
                end: year_month!(2000, 1),
            })
        );
    }

    #[test]
    fn length() {
        assert_eq!(jan_2000_to_feb_2015().length(), 181);
        let single = Period::new(year_month!(2010, 6), year_month!(2010, 6)).unwrap();
        assert_eq!(single.length(), 0);
        assert_eq!(single.months().count(), 1);
    }

    #[test]
    fn offsets() {
        let period = jan_2000_to_feb_2015();
        assert_eq!(period.month_at(0), year_month!(2000, 1));
        assert_eq!(period.month_at(18), year_month!(2001, 7));
        assert_eq!(period.month_at(-1), year_month!(1999, 12));
        assert_eq!(period.offset_of(&year_month!(2001, 7)), Some(18));
        assert_eq!(period.offset_of(&year_month!(1999, 12)), None);
        assert_eq!(period.offset_of(&year_month!(2015, 3)), None);
    }

    #[test]
    fn every_offset_maps_back_to_itself() {
        let period = jan_2000_to_feb_2015();
        for offset in 0..=period.length() {
            let date: YearMonth = period.month_at(i64::from(offset));
            assert_eq!(period.offset_of(&date), Some(offset));
        }
        assert_eq!(period.months().last(), Some(period.end()));
    }

    #[test]
    fn deserialize() {
        let period: Period =
            serde_json::from_str(r#"{"start": "Jan 2000", "end": "Feb 2015"}"#).unwrap();
        assert_eq!(period, jan_2000_to_feb_2015());
        assert!(
            serde_json::from_str::<Period>(r#"{"start": "Feb 2015", "end": "Jan 2000"}"#)
                .is_err()
        );
    }
}

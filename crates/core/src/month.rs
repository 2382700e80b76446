// SPDX-License-Identifier: MIT

//!
//! The ELMR calendar month types
//!

use crate::DateFormat;
use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The minimum year allowed in the ELMR system
pub const MIN_YEAR: i64 = 1;

/// The maximum year allowed in the ELMR system (keeps `YYYY` to four digits)
pub const MAX_YEAR: i64 = 9999;

/// Abbreviated month names, indexed by `month - 1`
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full month names, indexed by `month - 1`
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Errors that can arise in relation to a [`YearMonth`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonthError {
    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(i64),

    /// The year number is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),

    /// The text could not be read as a calendar month
    #[error("`{0}` is not a calendar month")]
    Unparseable(String),
}

/// The ELMR month type (1 = January)
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Month(u8);

/// The ELMR year type
///
/// The minimum year allowed is [`MIN_YEAR`].  The maximum year allowed is
/// [`MAX_YEAR`]
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Month {
    pub fn value(&self) -> u8 {
        self.0
    }

    /// e.g. "Jan"
    pub fn abbreviation(&self) -> &'static str {
        MONTH_ABBREVIATIONS[usize::from(self.0 - 1)]
    }

    /// e.g. "January"
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.0 - 1)]
    }

    /// Look a month up by its full or abbreviated name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        MONTH_NAMES
            .iter()
            .zip(MONTH_ABBREVIATIONS.iter())
            .position(|(full, abbr)| {
                full.eq_ignore_ascii_case(name) || abbr.eq_ignore_ascii_case(name)
            })
            .map(|index| Month(index as u8 + 1))
    }
}

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn min() -> Self {
        Year(MIN_YEAR as i32)
    }

    pub fn max() -> Self {
        Year(MAX_YEAR as i32)
    }
}

impl TryFrom<i64> for Month {
    type Error = MonthError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=12).contains(&value) {
            Ok(Month(value as u8))
        } else {
            Err(MonthError::InvalidMonth(value))
        }
    }
}

impl TryFrom<i64> for Year {
    type Error = MonthError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value as i32))
        } else {
            Err(MonthError::InvalidYear(value))
        }
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Month::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Year::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// A calendar month (day of month is not significant)
///
/// Ordering is chronological.  Field order matters for the derived `Ord`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct YearMonth {
    year: Year,
    month: Month,
}

impl YearMonth {
    /// Create a new [`YearMonth`] from already validated parts
    pub fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Create a new [`YearMonth`] if the result will be valid
    pub fn from(year: i64, month: i64) -> Result<Self, MonthError> {
        Ok(Self {
            year: Year::try_from(year)?,
            month: Month::try_from(month)?,
        })
    }

    /// The month containing today's date (local clock)
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::from_index(i64::from(today.year()) * 12 + i64::from(today.month0()))
    }

    /// Get the year
    pub fn year(&self) -> Year {
        self.year
    }

    /// Get the month
    pub fn month(&self) -> Month {
        self.month
    }

    /// Signed number of months from `self` to `other` (positive when `other`
    /// is later)
    pub fn months_until(&self, other: &YearMonth) -> i64 {
        other.index() - self.index()
    }

    /// The month `months` months after (or before, if negative) this one.
    ///
    /// Not bounded by any period.  Results beyond the supported years saturate
    /// at [`MIN_YEAR`] January / [`MAX_YEAR`] December.
    pub fn add_months(&self, months: i64) -> YearMonth {
        Self::from_index(self.index().saturating_add(months))
    }

    /// Months since January of year 0
    fn index(&self) -> i64 {
        i64::from(self.year.0) * 12 + i64::from(self.month.0 - 1)
    }

    fn from_index(index: i64) -> Self {
        let index = index.clamp(MIN_YEAR * 12, MAX_YEAR * 12 + 11);
        Self {
            year: Year(index.div_euclid(12) as i32),
            month: Month(index.rem_euclid(12) as u8 + 1),
        }
    }
}

impl Default for YearMonth {
    /// January 2000
    fn default() -> Self {
        Self {
            year: Year(2000),
            month: Month(1),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:04}", self.month.abbreviation(), self.year.0)
    }
}

impl FromStr for YearMonth {
    type Err = MonthError;

    /// Parse the default `MMM YYYY` form, e.g. "Feb 2015"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFormat::default()
            .parse(s)
            .map_err(|_| MonthError::Unparseable(s.to_string()))
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::{Month, MonthError, Year, YearMonth};
    use elmr_macros::{month, year, year_month};

    #[test]
    fn from() {
        // Should return error
        assert_eq!(YearMonth::from(2000, 0), Err(MonthError::InvalidMonth(0)));
        assert_eq!(YearMonth::from(2000, 13), Err(MonthError::InvalidMonth(13)));
        assert_eq!(YearMonth::from(0, 1), Err(MonthError::InvalidYear(0)));
        assert_eq!(
            YearMonth::from(10_000, 1),
            Err(MonthError::InvalidYear(10_000))
        );

        // Should be ok
        let date = YearMonth::from(2015, 2).unwrap();
        assert_eq!(date.year(), year!(2015));
        assert_eq!(date.month(), month!(2));
    }

    #[test]
    fn cmp() {
        assert!(year_month!(2000, 1) < year_month!(2000, 2));
        assert!(year_month!(1999, 12) < year_month!(2000, 1));
        assert_eq!(year_month!(2015, 2), year_month!(2015, 2));
    }

    #[test]
    fn months_until() {
        let min = year_month!(2000, 1);
        assert_eq!(min.months_until(&year_month!(2015, 2)), 181);
        assert_eq!(min.months_until(&min), 0);
        assert_eq!(year_month!(2001, 3).months_until(&min), -14);
    }

    #[test]
    fn add_months() {
        let min = year_month!(2000, 1);
        assert_eq!(min.add_months(18), year_month!(2001, 7));
        assert_eq!(min.add_months(-1), year_month!(1999, 12));
        assert_eq!(year_month!(2014, 12).add_months(2), year_month!(2015, 2));

        // Saturates at the edges of the supported years
        assert_eq!(min.add_months(i64::MAX), year_month!(9999, 12));
        assert_eq!(min.add_months(i64::MIN), year_month!(1, 1));
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(year_month!(2015, 2).to_string(), "Feb 2015");
        assert_eq!("Jul 2001".parse::<YearMonth>(), Ok(year_month!(2001, 7)));
        assert!("Smarch 2001".parse::<YearMonth>().is_err());
    }

    #[test]
    fn names() {
        assert_eq!(month!(9).abbreviation(), "Sep");
        assert_eq!(month!(9).name(), "September");
        assert_eq!(Month::from_name("sept"), None);
        assert_eq!(Month::from_name("SEP"), Some(month!(9)));
        assert_eq!(Month::from_name("december"), Some(month!(12)));
    }

    #[test]
    fn serde() {
        let json = serde_json::to_string(&year_month!(2000, 1)).unwrap();
        assert_eq!(json, "\"Jan 2000\"");
        let date: YearMonth = serde_json::from_str("\"Mar 2010\"").unwrap();
        assert_eq!(date, year_month!(2010, 3));
        assert!(serde_json::from_str::<Year>("0").is_err());
        assert!(serde_json::from_str::<Month>("12").is_ok());
    }
}

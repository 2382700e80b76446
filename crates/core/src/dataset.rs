// SPDX-License-Identifier: MIT

//!
//! Source datasets (a source's monthly records over an analysis period)
//!

use crate::{Period, YearMonth};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use thiserror::Error;

/// Record keys that hold bookkeeping rather than series values
pub const RECORD_DATE_KEY: &str = "DATE";
pub const RECORD_YEAR_KEY: &str = "YEAR";
pub const RECORD_MONTH_KEY: &str = "MONTH";

/// Errors that can arise when loading a [`SourceDataset`]
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Could not read the dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not decode the dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// The number of records doesn't match the number of months in the period
    #[error("The dataset period has {expected} months but there are {found} records")]
    RecordCount { expected: usize, found: usize },
}

/// One month's values, keyed by series ID (plus the `DATE`, `YEAR` & `MONTH`
/// bookkeeping keys)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Record(HashMap<String, Value>);

impl Record {
    /// The numeric value of a series in this record
    pub fn value(&self, series_id: &str) -> Option<f64> {
        self.0.get(series_id).and_then(Value::as_f64)
    }

    /// The record's month, if it carries a readable `DATE`
    pub fn date(&self) -> Option<YearMonth> {
        self.0
            .get(RECORD_DATE_KEY)
            .and_then(Value::as_str)
            .and_then(|date| date.parse().ok())
    }

    /// The IDs of the series that have values in this record
    pub fn series_ids(&self) -> impl Iterator<Item = &str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|key| !matches!(*key, RECORD_DATE_KEY | RECORD_YEAR_KEY | RECORD_MONTH_KEY))
    }
}

/// A source's monthly records over its analysis period.  Record `n` holds the
/// values for month `n` of the period, so slider positions index straight into
/// [`SourceDataset::records`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SourceDataset {
    #[serde(default)]
    title: String,

    #[serde(default)]
    version: String,

    period: Period,

    /// Series ID -> human readable title
    #[serde(default)]
    descriptions: HashMap<String, String>,

    #[serde(rename = "data")]
    records: Vec<Record>,
}

impl SourceDataset {
    /// Decode a dataset from JSON text
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        serde_json::from_str::<Self>(json)?.checked()
    }

    /// Decode a dataset from a reader (e.g. a file)
    pub fn from_reader(reader: impl Read) -> Result<Self, DatasetError> {
        serde_json::from_reader::<_, Self>(reader)?.checked()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The analysis period covered by the records
    pub fn period(&self) -> Period {
        self.period
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The value of a series at a month offset into the period
    pub fn value(&self, offset: u32, series_id: &str) -> Option<f64> {
        self.records.get(offset as usize)?.value(series_id)
    }

    /// The value of a series in a given month
    pub fn value_at(&self, date: &YearMonth, series_id: &str) -> Option<f64> {
        self.value(self.period.offset_of(date)?, series_id)
    }

    /// The human readable title of a series
    pub fn description(&self, series_id: &str) -> Option<&str> {
        self.descriptions.get(series_id).map(String::as_str)
    }

    /// Check there is one record per month, then log the load
    fn checked(self) -> Result<Self, DatasetError> {
        let expected = self.period.length() as usize + 1;
        if self.records.len() != expected {
            return Err(DatasetError::RecordCount {
                expected,
                found: self.records.len(),
            });
        }
        info!(
            "Loaded dataset '{}' ({} to {}, {} records)",
            self.title,
            self.period.start(),
            self.period.end(),
            self.records.len()
        );
        Ok(self)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::{DatasetError, SourceDataset};
    use crate::YearMonth;
    use elmr_macros::year_month;

    /// A small CPS-like dataset covering Jan 2000 to Jun 2000
    pub(crate) fn cps_dataset() -> SourceDataset {
        SourceDataset::from_json(CPS_JSON).unwrap()
    }

    pub(crate) const CPS_JSON: &str = r#"{
        "title": "ELMR Ingested CPS Data",
        "version": "0.3",
        "period": {"start": "Jan 2000", "end": "Jun 2000"},
        "descriptions": {
            "LNS14000000": "Unemployment Rate",
            "LNS12000000": "Employment Level"
        },
        "data": [
            {"DATE": "Jan 2000", "YEAR": 2000, "MONTH": 1, "LNS14000000": 4.0, "LNS12000000": 136559},
            {"DATE": "Feb 2000", "YEAR": 2000, "MONTH": 2, "LNS14000000": 4.1, "LNS12000000": 136598},
            {"DATE": "Mar 2000", "YEAR": 2000, "MONTH": 3, "LNS14000000": 4.0, "LNS12000000": 136701},
            {"DATE": "Apr 2000", "YEAR": 2000, "MONTH": 4, "LNS14000000": 3.8, "LNS12000000": 137270},
            {"DATE": "May 2000", "YEAR": 2000, "MONTH": 5, "LNS14000000": 4.0, "LNS12000000": 136630},
            {"DATE": "Jun 2000", "YEAR": 2000, "MONTH": 6, "LNS14000000": 4.0, "LNS12000000": 136940}
        ]
    }"#;

    #[test]
    fn from_json() {
        let dataset = cps_dataset();
        assert_eq!(dataset.title(), "ELMR Ingested CPS Data");
        assert_eq!(dataset.period().length(), 5);
        assert_eq!(dataset.records().len(), 6);
        assert_eq!(dataset.description("LNS14000000"), Some("Unemployment Rate"));
        assert_eq!(dataset.records()[3].date(), Some(year_month!(2000, 4)));
    }

    #[test]
    fn values() {
        let dataset = cps_dataset();
        assert_eq!(dataset.value(0, "LNS14000000"), Some(4.0));
        assert_eq!(dataset.value(3, "LNS12000000"), Some(137270.0));
        assert_eq!(dataset.value(6, "LNS14000000"), None);
        assert_eq!(dataset.value(0, "LNS00000000"), None);
        let april: YearMonth = year_month!(2000, 4);
        assert_eq!(dataset.value_at(&april, "LNS14000000"), Some(3.8));
        assert_eq!(dataset.value_at(&year_month!(2001, 1), "LNS14000000"), None);

        let mut ids: Vec<&str> = dataset.records()[0].series_ids().collect();
        ids.sort();
        assert_eq!(ids, vec!["LNS12000000", "LNS14000000"]);
    }

    #[test]
    fn record_count_must_match_period() {
        let json = r#"{
            "period": {"start": "Jan 2000", "end": "Mar 2000"},
            "data": [{"DATE": "Jan 2000"}]
        }"#;
        assert!(matches!(
            SourceDataset::from_json(json),
            Err(DatasetError::RecordCount {
                expected: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn from_reader() {
        let dataset = SourceDataset::from_reader(CPS_JSON.as_bytes()).unwrap();
        assert_eq!(dataset, cps_dataset());

        // Same record count check as `from_json`
        let short = r#"{
            "period": {"start": "Jan 2000", "end": "Feb 2000"},
            "data": [{"DATE": "Jan 2000"}]
        }"#;
        assert!(matches!(
            SourceDataset::from_reader(short.as_bytes()),
            Err(DatasetError::RecordCount {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            SourceDataset::from_json("{"),
            Err(DatasetError::Json(_))
        ));
    }
}

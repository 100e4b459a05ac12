use chrono::naive::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

/// Date format used in the OWID CSV export: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Alternate slashed date format accepted on load: "YYYY/MM/DD"
pub const SLASH_DATE_FORMAT: &str = "%Y/%m/%d";

/// Date format used for text shown on the page: "DD/MM/YYYY"
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Header names of the columns consumed from the CSV export.
pub const COLUMN_LOCATION: &str = "location";
pub const COLUMN_DATE: &str = "date";
pub const COLUMN_TOTAL_CASES: &str = "total_cases";
pub const COLUMN_NEW_CASES: &str = "new_cases";

/// A single per-location, per-day row from the case dataset.
///
/// The case counts are `None` when the source cell is empty. A missing
/// measurement still belongs to the dataset; it serializes as JSON `null`
/// and renders as a gap in the charts.
#[derive(Debug, Clone, Serialize)]
pub struct Observation {
    /// Country or region name as spelled in the export (e.g. "Brazil").
    pub location: String,
    /// Calendar date of the measurement.
    pub date: NaiveDate,
    /// Cumulative confirmed cases up to this date.
    pub total_cases: Option<f64>,
    /// Newly confirmed cases on this date.
    pub new_cases: Option<f64>,
}

impl Observation {
    /// Parse a date cell, accepting the dashed and the slashed form.
    pub fn parse_date(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(value, SLASH_DATE_FORMAT))
            .ok()
    }
}

impl Ord for Observation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl Eq for Observation {}

impl PartialEq for Observation {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.location == other.location
    }
}

impl PartialOrd for Observation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

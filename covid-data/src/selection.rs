use chrono::naive::NaiveDate;
use serde::Deserialize;

/// The current values of the dashboard's three filter widgets.
///
/// Rebuilt on every interaction; nothing is retained between requests.
/// The struct doubles as the chart endpoint's wire contract, so the field
/// names match the parameters the page script sends.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilterSelection {
    /// Location picked in the dropdown.
    pub location: String,
    /// Start of the date window (inclusive).
    pub start_date: NaiveDate,
    /// End of the date window (inclusive).
    pub end_date: NaiveDate,
}

//! Typed query methods for retrieving case data from the dataset.
//!
//! The date-window query backs the dashboard's chart callback: each
//! interaction asks for one location within one inclusive date range and
//! projects the result into the two chart figures.

use crate::error::{CovidDataError, Result};
use crate::observation::Observation;
use crate::CovidDataset;
use chrono::naive::NaiveDate;

/// Location preselected in the dropdown when the page first loads.
pub const DEFAULT_LOCATION: &str = "Brazil";

impl CovidDataset {
    /// Get the observation history for one location within a date range.
    ///
    /// Both endpoints are inclusive. Results keep the stored chronological
    /// order; nothing is re-sorted. An empty result is valid (the charts
    /// simply render empty), but a location the dataset has never seen is
    /// an [`CovidDataError::InvalidSelection`] error.
    pub fn query_location(
        &self,
        location: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<&Observation>> {
        if !self.contains_location(location) {
            return Err(CovidDataError::InvalidSelection(location.to_string()));
        }
        let rows: Vec<&Observation> = self
            .observations
            .iter()
            .filter(|o| o.location == location && o.date >= start_date && o.date <= end_date)
            .collect();
        log::info!(
            "[Covid Debug] query: query_location({}) returned {} records",
            location,
            rows.len()
        );
        Ok(rows)
    }

    /// True if the dataset has at least one observation for `location`.
    pub fn contains_location(&self, location: &str) -> bool {
        self.locations
            .binary_search_by(|probe| probe.as_str().cmp(location))
            .is_ok()
    }

    /// The location preselected when the page first loads.
    ///
    /// [`DEFAULT_LOCATION`] when the dataset has it, otherwise the first
    /// location in sorted order so arbitrary exports still get a valid
    /// default.
    pub fn default_location(&self) -> &str {
        if self.contains_location(DEFAULT_LOCATION) {
            DEFAULT_LOCATION
        } else {
            self.locations
                .first()
                .map(String::as_str)
                .unwrap_or(DEFAULT_LOCATION)
        }
    }
}

//! In-memory dataset store for COVID-19 case data.
//!
//! This crate loads an OWID-style `owid-covid-data.csv` export into a
//! chronologically sorted in-memory table and exposes typed query methods
//! for consumption by the dashboard's chart endpoints.
//!
//! # Architecture
//!
//! - CSV parsed once at startup; the dataset is immutable afterwards
//! - Rows stable-sorted by date, so same-day rows keep their file order
//! - Distinct sorted location list and date bounds derived during load
//! - Shared read-only across request handlers, no locks needed
//!
//! # Usage
//!
//! ```rust
//! use covid_data::CovidDataset;
//!
//! let csv = "\
//! location,date,total_cases,new_cases
//! Brazil,2020-02-26,1.0,1.0
//! Brazil,2020-02-27,1.0,0.0
//! ";
//! let dataset = CovidDataset::from_csv_str(csv).unwrap();
//! assert_eq!(dataset.locations(), ["Brazil"]);
//!
//! let rows = dataset
//!     .query_location("Brazil", dataset.min_date(), dataset.max_date())
//!     .unwrap();
//! assert_eq!(rows.len(), 2);
//! ```
//!
//! # CSV Format
//!
//! The loader locates the `location`, `date`, `total_cases` and `new_cases`
//! columns by header name; any other columns in the export are ignored.
//! Empty case-count cells load as `None` (a missing measurement, not an
//! error), while malformed cells abort the load with a line-numbered error.

pub mod error;
pub mod observation;
pub mod selection;

mod loader;
mod queries;

pub use error::{CovidDataError, Result};
pub use observation::Observation;
pub use queries::DEFAULT_LOCATION;
pub use selection::FilterSelection;

use chrono::naive::NaiveDate;

/// The COVID-19 case dataset, loaded once at startup.
///
/// Observations are stored sorted by date. The distinct location list and
/// the date bounds are derived during load and drive the filter widgets:
/// locations populate the dropdown, the bounds clamp the date pickers.
///
/// Loading rejects an empty dataset, so the bounds are always defined.
#[derive(Debug, Clone)]
pub struct CovidDataset {
    observations: Vec<Observation>,
    locations: Vec<String>,
    min_date: NaiveDate,
    max_date: NaiveDate,
}

impl CovidDataset {
    /// All observations in chronological order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Distinct location names in sorted order (the dropdown options).
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Earliest observation date (lower bound of the date pickers).
    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    /// Latest observation date (upper bound of the date pickers).
    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }
}

//! CSV loading for the in-memory case dataset.
//!
//! The loader reads an OWID-style export once at startup, locating the
//! `location`, `date`, `total_cases` and `new_cases` columns by header name
//! so surplus columns in the export are ignored. Any malformed cell aborts
//! the load with a line-numbered error; the dashboard treats every load
//! error as fatal.

use crate::error::{CovidDataError, Result};
use crate::observation::{
    Observation, COLUMN_DATE, COLUMN_LOCATION, COLUMN_NEW_CASES, COLUMN_TOTAL_CASES,
};
use crate::CovidDataset;
use csv::StringRecord;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

impl CovidDataset {
    /// Load the dataset from a CSV file on disk.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(BufReader::new(file))
    }

    /// Load the dataset from a CSV string.
    ///
    /// # Example CSV
    /// ```text
    /// location,date,total_cases,new_cases
    /// Brazil,2020-02-26,1.0,1.0
    /// Brazil,2020-02-27,1.0,0.0
    /// ```
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_csv_reader(csv_data.as_bytes())
    }

    /// Load the dataset from any CSV reader.
    ///
    /// Rows are stable-sorted by date after parsing, and the distinct
    /// location list and date bounds are derived from the sorted rows.
    /// A dataset with no rows is an error, since the filter widgets
    /// would have no bounds to clamp to.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let location_idx = column_index(&headers, COLUMN_LOCATION)?;
        let date_idx = column_index(&headers, COLUMN_DATE)?;
        let total_cases_idx = column_index(&headers, COLUMN_TOTAL_CASES)?;
        let new_cases_idx = column_index(&headers, COLUMN_NEW_CASES)?;

        let mut observations = Vec::new();
        for result in rdr.records() {
            let r = result?;
            let line = r.position().map(|p| p.line()).unwrap_or(0);

            let location = r.get(location_idx).unwrap_or("").trim();
            if location.is_empty() {
                return Err(CovidDataError::MissingLocation { line });
            }

            let date_str = r.get(date_idx).unwrap_or("").trim();
            let date = Observation::parse_date(date_str).ok_or_else(|| {
                CovidDataError::DateParse {
                    line,
                    value: date_str.to_string(),
                }
            })?;

            let total_cases = parse_case_count(&r, total_cases_idx, COLUMN_TOTAL_CASES, line)?;
            let new_cases = parse_case_count(&r, new_cases_idx, COLUMN_NEW_CASES, line)?;

            observations.push(Observation {
                location: location.to_string(),
                date,
                total_cases,
                new_cases,
            });
        }

        // Vec::sort is stable, so same-day rows keep their file order.
        observations.sort();

        let (min_date, max_date) = match (observations.first(), observations.last()) {
            (Some(first), Some(last)) => (first.date, last.date),
            _ => return Err(CovidDataError::Empty),
        };

        let locations: Vec<String> = observations
            .iter()
            .map(|o| o.location.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        log::info!(
            "[Covid Debug] loader: Loaded {} observations across {} locations ({} to {})",
            observations.len(),
            locations.len(),
            min_date,
            max_date
        );
        Ok(Self {
            observations,
            locations,
            min_date,
            max_date,
        })
    }
}

/// Locate a required column by header name.
fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or(CovidDataError::MissingColumn(name))
}

/// Parse a case-count cell. An empty cell is a missing measurement, not
/// an error; anything else must be numeric.
fn parse_case_count(
    record: &StringRecord,
    idx: usize,
    column: &'static str,
    line: u64,
) -> Result<Option<f64>> {
    let value = record.get(idx).unwrap_or("").trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(v) => Ok(Some(v)),
        Err(_) => Err(CovidDataError::NumberParse {
            line,
            column,
            value: value.to_string(),
        }),
    }
}

//! The filter-to-charts binding.
//!
//! One pure function connects the three filter widgets to the two chart
//! panels: give it the dataset and the current selection, get back both
//! figures. Every interaction on the page goes through here.

use crate::figure::{Figure, TraceKind};
use chrono::naive::NaiveDate;
use covid_data::{CovidDataset, FilterSelection, Result};
use serde::Serialize;

/// Title of the cumulative cases chart.
pub const TOTAL_CASES_TITLE: &str = "Total de casos de COVID-19";

/// Title of the daily new cases chart.
pub const NEW_CASES_TITLE: &str = "Novos casos por dia";

/// Line color of the cumulative cases chart.
pub const TOTAL_CASES_COLOR: &str = "#ff3333";

/// Bar color of the daily new cases chart.
pub const NEW_CASES_COLOR: &str = "#3333ff";

/// The two figures produced by one filter interaction.
///
/// Also the chart endpoint's response body; the field names match the
/// chart card ids on the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPair {
    pub total_cases: Figure,
    pub new_cases: Figure,
}

/// Produce both chart figures for the current filter selection.
///
/// Selects the observations matching the location within the inclusive
/// date window, then projects them into the cumulative line figure and
/// the daily bar figure. The projection keeps the dataset's chronological
/// order and shares one x vector between the figures.
///
/// An empty selection yields two valid empty figures; a location the
/// dataset does not contain is an error, passed through from the query.
/// The function reads nothing but its arguments, so equal inputs always
/// produce equal figures.
pub fn update_charts(dataset: &CovidDataset, selection: &FilterSelection) -> Result<ChartPair> {
    let rows = dataset.query_location(
        &selection.location,
        selection.start_date,
        selection.end_date,
    )?;

    let x: Vec<NaiveDate> = rows.iter().map(|o| o.date).collect();
    let total_cases: Vec<Option<f64>> = rows.iter().map(|o| o.total_cases).collect();
    let new_cases: Vec<Option<f64>> = rows.iter().map(|o| o.new_cases).collect();

    Ok(ChartPair {
        total_cases: Figure::new(
            TraceKind::Lines,
            TOTAL_CASES_TITLE,
            TOTAL_CASES_COLOR,
            x.clone(),
            total_cases,
        ),
        new_cases: Figure::new(TraceKind::Bar, NEW_CASES_TITLE, NEW_CASES_COLOR, x, new_cases),
    })
}

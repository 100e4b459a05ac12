//! Declarative chart figures for the COVID-19 dashboard.
//!
//! This crate turns one filter selection into the two chart descriptions
//! shown on the dashboard page: cumulative cases as a line and daily new
//! cases as bars. The descriptions serialize to the figure-object JSON the
//! browser-side charting library consumes directly; nothing here draws
//! pixels.
//!
//! # Data flow
//!
//! 1. The page script sends the current widget values to the chart endpoint.
//! 2. [`update_charts`] queries the shared [`covid_data::CovidDataset`] for
//!    the selection's location and date window.
//! 3. The matching observations are projected into a [`ChartPair`], which
//!    the endpoint returns as JSON for the library to render.

pub mod binding;
pub mod figure;

pub use binding::{
    update_charts, ChartPair, NEW_CASES_COLOR, NEW_CASES_TITLE, TOTAL_CASES_COLOR,
    TOTAL_CASES_TITLE,
};
pub use figure::{Axis, Figure, Layout, Title, Trace, TraceKind};

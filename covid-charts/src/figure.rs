//! Figure-object structs matching the charting library's JSON contract.
//!
//! Every struct here serializes field-for-field into the shape the
//! browser-side library expects, so a [`Figure`] can be handed over
//! unchanged: `{"data": [...], "layout": {...}}`.

use chrono::naive::NaiveDate;
use serde::Serialize;

/// Horizontal title position, as a fraction of the plot width.
pub const TITLE_X: f64 = 0.05;

/// Edge the title position is measured from.
pub const TITLE_XANCHOR: &str = "left";

/// How a trace is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    /// Connected line, used for cumulative totals.
    Lines,
    /// Vertical bars, used for daily counts.
    Bar,
}

/// One chart series: paired x/y vectors plus the draw style.
///
/// The vectors are index-aligned. A `None` in `y` serializes as `null`,
/// which the charting library renders as a gap at that date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub x: Vec<NaiveDate>,
    pub y: Vec<Option<f64>>,
    #[serde(rename = "type")]
    pub kind: TraceKind,
}

/// Chart title block, anchored to the left edge of the plot area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub x: f64,
    pub xanchor: String,
}

/// Axis options. Panning and zooming stay disabled on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Axis {
    pub fixedrange: bool,
}

/// Figure layout: left-anchored title, fixed axes, one-color palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub colorway: Vec<String>,
}

/// A complete declarative chart description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Build a single-trace figure with the dashboard's standard layout.
    pub fn new(
        kind: TraceKind,
        title: &str,
        color: &str,
        x: Vec<NaiveDate>,
        y: Vec<Option<f64>>,
    ) -> Self {
        Figure {
            data: vec![Trace { x, y, kind }],
            layout: Layout {
                title: Title {
                    text: title.to_string(),
                    x: TITLE_X,
                    xanchor: TITLE_XANCHOR.to_string(),
                },
                xaxis: Axis { fixedrange: true },
                yaxis: Axis { fixedrange: true },
                colorway: vec![color.to_string()],
            },
        }
    }

    /// Number of points in the figure's trace.
    pub fn point_count(&self) -> usize {
        self.data.first().map(|trace| trace.x.len()).unwrap_or(0)
    }
}

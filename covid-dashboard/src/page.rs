//! One-shot page rendering.
//!
//! The page depends only on the immutable dataset (location options, date
//! bounds, default selection), so it is rendered exactly once at startup,
//! stylesheet links included, and cached in the router state. The
//! stylesheet and the widget script are embedded at compile time and
//! served as static assets.

use covid_data::observation::DISPLAY_DATE_FORMAT;
use covid_data::CovidDataset;

/// HTML skeleton with `{{...}}` markers filled in by [`render_page`].
const PAGE_TEMPLATE: &str = include_str!("../assets/page.html");

/// Stylesheet served at `/assets/style.css`.
pub const STYLE_CSS: &str = include_str!("../assets/style.css");

/// Widget wiring script served at `/assets/dashboard.js`.
pub const DASHBOARD_JS: &str = include_str!("../assets/dashboard.js");

/// Page title shown in the browser tab and the header.
pub const PAGE_TITLE: &str = "Dados da COVID-19";

/// Render the dashboard page for the loaded dataset.
///
/// Fills in the header's date span, the sorted location options with the
/// default preselected, and the date inputs clamped to the dataset bounds.
pub fn render_page(dataset: &CovidDataset) -> String {
    let min_date = dataset.min_date();
    let max_date = dataset.max_date();
    let description = format!(
        "Analisa os casos de COVID-19 no mundo no período de {} a {}",
        min_date.format(DISPLAY_DATE_FORMAT),
        max_date.format(DISPLAY_DATE_FORMAT)
    );

    let default_location = dataset.default_location();
    let mut options = String::new();
    for location in dataset.locations() {
        let escaped = escape_html(location);
        let selected = if location == default_location {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "                <option value=\"{0}\"{1}>{0}</option>\n",
            escaped, selected
        ));
    }

    PAGE_TEMPLATE
        .replace("{{TITLE}}", PAGE_TITLE)
        .replace("{{HEADER_DESCRIPTION}}", &description)
        .replace("{{LOCATION_OPTIONS}}", options.trim_end())
        .replace("{{MIN_DATE}}", &min_date.to_string())
        .replace("{{MAX_DATE}}", &max_date.to_string())
}

/// Escape text inlined into HTML attribute or element positions.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use covid_dashboard::server;
use covid_data::CovidDataset;
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

/// Helper to build a router over a small two-location dataset.
fn test_router() -> Router {
    let csv = "\
location,date,total_cases,new_cases
Brazil,2020-02-26,1.0,1.0
Brazil,2020-02-27,1.0,0.0
Brazil,2020-02-28,2.0,1.0
Argentina,2020-03-03,1.0,1.0
";
    let dataset = CovidDataset::from_csv_str(csv).unwrap();
    server::router(dataset)
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn page_is_served_at_root() {
    let response = get(test_router(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = body_string(response).await;
    assert!(body.contains("<title>Dados da COVID-19</title>"));
    assert!(body.contains(r#"<option value="Brazil" selected>Brazil</option>"#));
    assert!(body.contains(r#"id="start-date" min="2020-02-26" max="2020-03-03""#));
    assert!(body.contains(r#"<div id="total_de_casos">"#));
    assert!(body.contains(r#"<div id="casos_por_dia">"#));
}

#[tokio::test]
async fn charts_endpoint_returns_both_figures() {
    let response = get(
        test_router(),
        "/charts?location=Brazil&start_date=2020-02-26&end_date=2020-02-28",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();

    let total = &body["total_cases"];
    let new = &body["new_cases"];
    assert_eq!(total["data"][0]["x"].as_array().unwrap().len(), 3);
    assert_eq!(total["data"][0]["type"], "lines");
    assert_eq!(total["layout"]["colorway"][0], "#ff3333");
    assert_eq!(new["data"][0]["type"], "bar");
    assert_eq!(new["layout"]["title"]["text"], "Novos casos por dia");
    assert_eq!(new["layout"]["xaxis"]["fixedrange"], true);
}

#[tokio::test]
async fn charts_window_with_no_rows_is_valid_and_empty() {
    let response = get(
        test_router(),
        "/charts?location=Brazil&start_date=2021-01-01&end_date=2021-01-31",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["total_cases"]["data"][0]["x"].as_array().unwrap().len(), 0);
    assert_eq!(body["new_cases"]["data"][0]["y"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn charts_unknown_location_is_rejected() {
    let response = get(
        test_router(),
        "/charts?location=Atlantis&start_date=2020-02-26&end_date=2020-02-28",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "error");
    assert!(body["error"].as_str().unwrap().contains("Atlantis"));
}

#[tokio::test]
async fn charts_malformed_date_is_rejected() {
    let response = get(
        test_router(),
        "/charts?location=Brazil&start_date=26/02/2020&end_date=2020-02-28",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn charts_missing_parameters_are_rejected() {
    let response = get(test_router(), "/charts?location=Brazil").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stylesheet_is_served_with_css_content_type() {
    let response = get(test_router(), "/assets/style.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/css"));

    let body = body_string(response).await;
    assert!(body.contains("Oswald"));
    assert!(body.contains(".header-title"));
}

#[tokio::test]
async fn widget_script_is_served_with_js_content_type() {
    let response = get(test_router(), "/assets/dashboard.js").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("application/javascript"));

    let body = body_string(response).await;
    assert!(body.contains("Plotly.react"));
    assert!(body.contains("displayModeBar: false"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = get(test_router(), "/no/such/route").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

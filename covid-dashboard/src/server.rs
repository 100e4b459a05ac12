//! HTTP interface for the dashboard.
//!
//! The router serves the pre-rendered page, the two embedded static assets
//! and the chart update endpoint. The only state is the immutable dataset
//! plus the cached page, shared behind an `Arc`; handlers never write.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use covid_charts::update_charts;
use covid_data::{CovidDataset, FilterSelection};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::page;

/// Immutable state shared by every request handler.
pub struct AppState {
    pub dataset: CovidDataset,
    pub page: String,
}

/// Build the dashboard router over the loaded dataset.
///
/// The page is rendered here, exactly once; every later request reads the
/// cached copy.
pub fn router(dataset: CovidDataset) -> Router {
    let page = page::render_page(&dataset);
    Router::new()
        .route("/", get(get_page))
        .route("/charts", get(get_charts))
        .route("/assets/style.css", get(get_style))
        .route("/assets/dashboard.js", get(get_script))
        .with_state(Arc::new(AppState { dataset, page }))
}

/// Bind the listener and serve until ctrl-c or SIGTERM.
pub async fn serve(addr: SocketAddr, dataset: CovidDataset) -> anyhow::Result<()> {
    let app = router(dataset);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("[Covid Debug] server: Listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn get_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.clone())
}

/// The chart update callback: current widget values in, both figures out.
async fn get_charts(
    State(state): State<Arc<AppState>>,
    Query(selection): Query<FilterSelection>,
) -> impl IntoResponse {
    match update_charts(&state.dataset, &selection) {
        Ok(charts) => {
            log::info!(
                "[Covid Debug] server: /charts location={} range={}..{} returned {} points",
                selection.location,
                selection.start_date,
                selection.end_date,
                charts.total_cases.point_count()
            );
            (StatusCode::OK, Json(charts)).into_response()
        }
        Err(err) => {
            log::warn!("[Covid Debug] server: /charts rejected: {}", err);
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "status": "error",
                    "error": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}

async fn get_style() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        page::STYLE_CSS,
    )
}

async fn get_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        page::DASHBOARD_JS,
    )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("[Covid Debug] server: Shutdown signal received, starting graceful shutdown");
}

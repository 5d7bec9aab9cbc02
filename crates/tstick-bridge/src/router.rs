//! Axum router wiring for the scrape endpoint.
//!
//! `/metrics` performs exactly one buffer collect per scrape; the snapshot
//! is rendered and the pending buffer starts empty again.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Router};

use crate::{app_state::AppState, exporter};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(scrape))
        .with_state(state)
}

async fn scrape(State(app): State<AppState>) -> Response {
    let samples = app.buffer().collect();
    match exporter::render(samples) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, exporter::content_type())],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "scrape render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

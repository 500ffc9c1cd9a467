//! HTTP adapters - REST API implementations.

pub mod report;

use axum::{routing::get, Router};

pub use report::{report_routes, ReportAppState};

/// Full API router: `/health` plus the report endpoints under `/api/reports`.
pub fn api_router(state: ReportAppState) -> Router {
    Router::new()
        .route("/health", get(report::health))
        .nest("/api/reports", report_routes(state))
}

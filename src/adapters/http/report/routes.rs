//! HTTP routes for report endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_composite_report, get_framework_report, list_reports, ReportAppState};

/// Creates the report router, to be nested under `/api/reports`.
pub fn report_routes(state: ReportAppState) -> Router {
    Router::new()
        .route("/:user_id", get(list_reports))
        .route("/:user_id/composite", get(get_composite_report))
        .route("/:user_id/frameworks/:test_type", get(get_framework_report))
        .with_state(state)
}

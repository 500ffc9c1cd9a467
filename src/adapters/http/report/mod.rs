//! HTTP adapter for report endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CompositeReportResponse, ErrorResponse, FrameworkReportResponse, HealthResponse,
    ReportListResponse, StoredReportView,
};
pub use handlers::{health, ReportApiError, ReportAppState};
pub use routes::report_routes;

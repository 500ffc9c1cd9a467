//! HTTP handlers for report endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    GenerateCompositeReportCommand, GenerateCompositeReportHandler, GenerateFrameworkReportCommand,
    GenerateFrameworkReportHandler, ListUserReportsHandler, ListUserReportsQuery,
};
use crate::domain::assessment::{AssessmentEngine, Framework};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{AnswerReader, ReportRepository};

use super::dto::{
    CompositeReportResponse, ErrorResponse, FrameworkReportResponse, HealthResponse,
    ReportListResponse, StoredReportView,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Report API error that implements IntoResponse.
#[derive(Debug)]
pub struct ReportApiError(pub DomainError);

impl ReportApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::UnsupportedFramework => StatusCode::BAD_REQUEST,
            ErrorCode::AssessmentNotCompleted | ErrorCode::ReportNotFound => StatusCode::NOT_FOUND,
            ErrorCode::NoCompletedAssessments => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::CatalogError | ErrorCode::DatabaseError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DomainError> for ReportApiError {
    fn from(error: DomainError) -> Self {
        ReportApiError(error)
    }
}

impl IntoResponse for ReportApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "Report request failed");
            ErrorResponse::internal("An unexpected error occurred")
        } else {
            ErrorResponse::from(&self.0)
        };
        (status, Json(body)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing report dependencies.
#[derive(Clone)]
pub struct ReportAppState {
    pub answer_reader: Arc<dyn AnswerReader>,
    pub report_repository: Arc<dyn ReportRepository>,
    pub engine: Arc<AssessmentEngine>,
}

impl ReportAppState {
    pub fn generate_framework_handler(&self) -> GenerateFrameworkReportHandler {
        GenerateFrameworkReportHandler::new(
            self.answer_reader.clone(),
            self.report_repository.clone(),
            self.engine.clone(),
        )
    }

    pub fn generate_composite_handler(&self) -> GenerateCompositeReportHandler {
        GenerateCompositeReportHandler::new(
            self.answer_reader.clone(),
            self.report_repository.clone(),
            self.engine.clone(),
        )
    }

    pub fn list_reports_handler(&self) -> ListUserReportsHandler {
        ListUserReportsHandler::new(self.report_repository.clone())
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, ReportApiError> {
    UserId::new(raw).map_err(|e| ReportApiError(e.into()))
}

fn parse_framework(raw: &str) -> Result<Framework, ReportApiError> {
    raw.parse::<Framework>().map_err(|e| {
        ReportApiError(
            DomainError::new(ErrorCode::UnsupportedFramework, e.to_string())
                .with_detail("test_type", raw),
        )
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/reports/:user_id/frameworks/:test_type
pub async fn get_framework_report(
    State(state): State<ReportAppState>,
    Path((user_id, test_type)): Path<(String, String)>,
) -> Result<impl IntoResponse, ReportApiError> {
    let user_id = parse_user_id(&user_id)?;
    let framework = parse_framework(&test_type)?;

    let result = state
        .generate_framework_handler()
        .handle(GenerateFrameworkReportCommand {
            user_id: user_id.clone(),
            framework,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(FrameworkReportResponse::new(&user_id, framework, result)),
    ))
}

/// GET /api/reports/:user_id/composite
pub async fn get_composite_report(
    State(state): State<ReportAppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ReportApiError> {
    let user_id = parse_user_id(&user_id)?;

    let result = state
        .generate_composite_handler()
        .handle(GenerateCompositeReportCommand {
            user_id: user_id.clone(),
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(CompositeReportResponse::new(&user_id, result)),
    ))
}

/// GET /api/reports/:user_id
pub async fn list_reports(
    State(state): State<ReportAppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ReportApiError> {
    let user_id = parse_user_id(&user_id)?;

    let reports = state
        .list_reports_handler()
        .handle(ListUserReportsQuery {
            user_id: user_id.clone(),
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(ReportListResponse {
            user_id: user_id.to_string(),
            reports: reports.into_iter().map(StoredReportView::from).collect(),
        }),
    ))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

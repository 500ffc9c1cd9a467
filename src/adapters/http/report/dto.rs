//! Data transfer objects for report endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{GenerateCompositeReportResult, GenerateFrameworkReportResult};
use crate::domain::assessment::{Classification, Framework};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::synthesis::CompositeReport;
use crate::ports::StoredReport;

/// Response for a single framework report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkReportResponse {
    pub report_id: String,
    pub user_id: String,
    pub test_type: Framework,
    pub generated_at: String,
    pub answers_scored: u32,
    pub answers_skipped: usize,
    pub classification: Classification,
}

impl FrameworkReportResponse {
    pub fn new(user_id: &UserId, framework: Framework, result: GenerateFrameworkReportResult) -> Self {
        Self {
            report_id: result.report_id.to_string(),
            user_id: user_id.to_string(),
            test_type: framework,
            generated_at: result.generated_at.as_datetime().to_rfc3339(),
            answers_scored: result.answers_scored,
            answers_skipped: result.answers_skipped,
            classification: result.classification,
        }
    }
}

/// Response for the composite report. Report fields are inlined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeReportResponse {
    pub report_id: String,
    pub user_id: String,
    pub generated_at: String,
    #[serde(flatten)]
    pub report: CompositeReport,
}

impl CompositeReportResponse {
    pub fn new(user_id: &UserId, result: GenerateCompositeReportResult) -> Self {
        Self {
            report_id: result.report_id.to_string(),
            user_id: user_id.to_string(),
            generated_at: result.generated_at.as_datetime().to_rfc3339(),
            report: result.report,
        }
    }
}

/// One stored report in a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredReportView {
    pub report_id: String,
    pub report_type: String,
    pub generated_at: String,
    pub result: serde_json::Value,
}

impl From<StoredReport> for StoredReportView {
    fn from(report: StoredReport) -> Self {
        Self {
            report_id: report.id.to_string(),
            report_type: report.kind.code().to_string(),
            generated_at: report.generated_at.as_datetime().to_rfc3339(),
            result: report.payload,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportListResponse {
    pub user_id: String,
    pub reports: Vec<StoredReportView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code.to_string(),
            message: error.message().to_string(),
            details,
        }
    }
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

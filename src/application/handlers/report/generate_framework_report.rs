//! GenerateFrameworkReport - Command handler that scores one framework.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::{AssessmentEngine, Classification, Framework};
use crate::domain::foundation::{DomainError, ErrorCode, ReportId, Timestamp, UserId};
use crate::ports::{AnswerReader, ReportKind, ReportRepository, StoredReport};

/// Command to (re)generate a single framework report.
#[derive(Debug, Clone)]
pub struct GenerateFrameworkReportCommand {
    pub user_id: UserId,
    pub framework: Framework,
}

/// Result of successful report generation.
#[derive(Debug, Clone)]
pub struct GenerateFrameworkReportResult {
    pub report_id: ReportId,
    pub classification: Classification,
    pub answers_scored: u32,
    pub answers_skipped: usize,
    pub generated_at: Timestamp,
}

/// Handler for framework reports.
pub struct GenerateFrameworkReportHandler {
    answers: Arc<dyn AnswerReader>,
    reports: Arc<dyn ReportRepository>,
    engine: Arc<AssessmentEngine>,
}

impl GenerateFrameworkReportHandler {
    pub fn new(
        answers: Arc<dyn AnswerReader>,
        reports: Arc<dyn ReportRepository>,
        engine: Arc<AssessmentEngine>,
    ) -> Self {
        Self {
            answers,
            reports,
            engine,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateFrameworkReportCommand,
    ) -> Result<GenerateFrameworkReportResult, DomainError> {
        info!(user_id = %cmd.user_id, framework = %cmd.framework, "Generating framework report");

        // 1. Fetch answers
        let answers = self.answers.get_answers(&cmd.user_id, cmd.framework).await?;

        // 2. Score and classify
        let evaluation = self
            .engine
            .evaluate(cmd.framework, &answers)
            .map_err(|e| DomainError::from(e).with_detail("user_id", cmd.user_id.as_str()))?;

        // 3. Persist
        let payload = serde_json::to_value(&evaluation.classification).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize classification: {}", e),
            )
        })?;
        let stored = StoredReport::new(
            cmd.user_id.clone(),
            ReportKind::Framework(cmd.framework),
            payload,
        );
        self.reports.save(&stored).await?;

        info!(
            user_id = %cmd.user_id,
            framework = %cmd.framework,
            code = %evaluation.classification.code,
            skipped = evaluation.skipped.len(),
            "Framework report generated"
        );

        Ok(GenerateFrameworkReportResult {
            report_id: stored.id,
            classification: evaluation.classification,
            answers_scored: evaluation.accepted,
            answers_skipped: evaluation.skipped.len(),
            generated_at: stored.generated_at,
        })
    }
}

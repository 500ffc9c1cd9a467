//! GenerateCompositeReport - Command handler that merges every completed
//! framework into one composite report.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::assessment::{AssessmentEngine, AssessmentError, Classification, Framework};
use crate::domain::foundation::{DomainError, ErrorCode, ReportId, Timestamp, UserId};
use crate::domain::synthesis::CompositeReport;
use crate::ports::{AnswerReader, ReportKind, ReportRepository, StoredReport};

#[derive(Debug, Clone)]
pub struct GenerateCompositeReportCommand {
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct GenerateCompositeReportResult {
    pub report_id: ReportId,
    pub report: CompositeReport,
    pub generated_at: Timestamp,
}

/// Handler for composite reports.
pub struct GenerateCompositeReportHandler {
    answers: Arc<dyn AnswerReader>,
    reports: Arc<dyn ReportRepository>,
    engine: Arc<AssessmentEngine>,
}

impl GenerateCompositeReportHandler {
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
        cmd: GenerateCompositeReportCommand,
    ) -> Result<GenerateCompositeReportResult, DomainError> {
        info!(user_id = %cmd.user_id, "Generating composite report");

        // 1. Classify every framework the user has completed
        let mut classifications: Vec<Classification> = Vec::new();
        for framework in Framework::ALL {
            let answers = self.answers.get_answers(&cmd.user_id, framework).await?;
            match self.engine.classify(framework, &answers) {
                Ok(c) => classifications.push(c),
                Err(AssessmentError::NoAnswersForFramework { .. }) => {
                    debug!(user_id = %cmd.user_id, framework = %framework, "Framework not completed");
                }
                Err(e) => return Err(e.into()),
            }
        }

        // 2. Synthesize
        let report = self
            .engine
            .synthesize(&classifications)
            .map_err(|e| DomainError::from(e).with_detail("user_id", cmd.user_id.as_str()))?;

        // 3. Persist
        let payload = serde_json::to_value(&report).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize composite report: {}", e),
            )
        })?;
        let stored = StoredReport::new(cmd.user_id.clone(), ReportKind::Composite, payload);
        self.reports.save(&stored).await?;

        info!(
            user_id = %cmd.user_id,
            completed = report.completed_tests.len(),
            "Composite report generated"
        );

        Ok(GenerateCompositeReportResult {
            report_id: stored.id,
            report,
            generated_at: stored.generated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::report::mocks::{
        disc_answers, engine, mbti_answers, user, MockAnswerReader, MockReportRepository,
    };
    use crate::domain::assessment::AnswerRecord;
    use serde_json::json;

    fn handler(
        reader: MockAnswerReader,
        repo: Arc<MockReportRepository>,
    ) -> GenerateCompositeReportHandler {
        GenerateCompositeReportHandler::new(Arc::new(reader), repo, engine())
    }

    fn cmd() -> GenerateCompositeReportCommand {
        GenerateCompositeReportCommand { user_id: user() }
    }

    #[tokio::test]
    async fn test_composite_includes_only_completed_frameworks() {
        let repo = Arc::new(MockReportRepository::new());
        let reader = MockAnswerReader::new()
            .with(Framework::Mbti, mbti_answers())
            .with(Framework::Disc, disc_answers());

        let result = handler(reader, repo.clone()).handle(cmd()).await.unwrap();

        assert_eq!(
            result.report.completed_tests,
            vec![Framework::Mbti, Framework::Disc]
        );
        assert_eq!(result.report.summary.disc_primary.as_deref(), Some("D"));
        let saved = repo.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].kind, ReportKind::Composite);
        assert_eq!(saved[0].payload["completed_tests"], json!(["MBTI", "DISC"]));
    }

    #[tokio::test]
    async fn test_framework_with_only_unusable_answers_is_not_completed() {
        let reader = MockAnswerReader::new()
            .with(Framework::Mbti, mbti_answers())
            .with(
                Framework::Enneagram,
                vec![AnswerRecord::new("Maybe", "類型1", ["是", "否"], json!({"類型1": 1}))],
            );
        let result = handler(reader, Arc::new(MockReportRepository::new()))
            .handle(cmd())
            .await
            .unwrap();
        assert_eq!(result.report.completed_tests, vec![Framework::Mbti]);
    }

    #[tokio::test]
    async fn test_nothing_completed_is_rejected() {
        let repo = Arc::new(MockReportRepository::new());
        let err = handler(MockAnswerReader::new(), repo.clone())
            .handle(cmd())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NoCompletedAssessments);
        assert_eq!(err.message(), "complete at least one assessment first");
        assert!(repo.saved().is_empty());
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let repo = Arc::new(MockReportRepository::failing());
        let reader = MockAnswerReader::new().with(Framework::Mbti, mbti_answers());
        let err = handler(reader, repo).handle(cmd()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}

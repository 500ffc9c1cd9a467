//! ListUserReports - Query handler for a user's stored reports.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{ReportRepository, StoredReport};

/// Query to list every stored report for a user, newest first.
#[derive(Debug, Clone)]
pub struct ListUserReportsQuery {
    pub user_id: UserId,
}

pub struct ListUserReportsHandler {
    reports: Arc<dyn ReportRepository>,
}

impl ListUserReportsHandler {
    pub fn new(reports: Arc<dyn ReportRepository>) -> Self {
        Self { reports }
    }

    pub async fn handle(&self, query: ListUserReportsQuery) -> Result<Vec<StoredReport>, DomainError> {
        self.reports.list_by_user(&query.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::report::mocks::{user, MockReportRepository};
    use crate::ports::ReportKind;
    use serde_json::json;

    #[tokio::test]
    async fn test_lists_saved_reports() {
        let repo = Arc::new(MockReportRepository::new());
        repo.save(&StoredReport::new(user(), ReportKind::Composite, json!({})))
            .await
            .unwrap();
        let handler = ListUserReportsHandler::new(repo);

        let reports = handler
            .handle(ListUserReportsQuery { user_id: user() })
            .await
            .unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].kind, ReportKind::Composite);
    }

    #[tokio::test]
    async fn test_empty_for_unknown_user() {
        let handler = ListUserReportsHandler::new(Arc::new(MockReportRepository::new()));
        let reports = handler
            .handle(ListUserReportsQuery {
                user_id: UserId::new("nobody").unwrap(),
            })
            .await
            .unwrap();
        assert!(reports.is_empty());
    }
}

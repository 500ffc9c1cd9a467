//! In-Memory Report Repository Adapter
//!
//! Keeps the latest report per (user, kind).

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{ReportKind, ReportRepository, StoredReport};

/// In-memory report storage
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportRepository {
    reports: Arc<RwLock<HashMap<(UserId, ReportKind), StoredReport>>>,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored reports
    pub async fn report_count(&self) -> usize {
        self.reports.read().await.len()
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn save(&self, report: &StoredReport) -> Result<(), DomainError> {
        let mut reports = self.reports.write().await;
        reports.insert((report.user_id.clone(), report.kind), report.clone());
        Ok(())
    }

    async fn find(
        &self,
        user_id: &UserId,
        kind: ReportKind,
    ) -> Result<Option<StoredReport>, DomainError> {
        let reports = self.reports.read().await;
        Ok(reports.get(&(user_id.clone(), kind)).cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<StoredReport>, DomainError> {
        let reports = self.reports.read().await;
        let mut found: Vec<StoredReport> = reports
            .values()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            b.generated_at
                .cmp(&a.generated_at)
                .then_with(|| a.kind.cmp(&b.kind))
        });
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Framework;
    use crate::domain::foundation::Timestamp;
    use chrono::{Duration, Utc};
    use serde_json::json;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn report_at(user_id: &str, kind: ReportKind, minutes_ago: i64) -> StoredReport {
        let mut report = StoredReport::new(user(user_id), kind, json!({"code": kind.code()}));
        report.generated_at = Timestamp::from_datetime(Utc::now() - Duration::minutes(minutes_ago));
        report
    }

    #[tokio::test]
    async fn saving_same_kind_twice_keeps_the_last_write() {
        let repo = InMemoryReportRepository::new();
        let kind = ReportKind::Framework(Framework::Mbti);
        let first = report_at("u1", kind, 5);
        let second = report_at("u1", kind, 1);

        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        assert_eq!(repo.report_count().await, 1);
        let found = repo.find(&user("u1"), kind).await.unwrap().unwrap();
        assert_eq!(found.id, second.id);
    }

    #[tokio::test]
    async fn list_is_newest_first_and_scoped_to_user() {
        let repo = InMemoryReportRepository::new();
        repo.save(&report_at("u1", ReportKind::Framework(Framework::Disc), 10))
            .await
            .unwrap();
        repo.save(&report_at("u1", ReportKind::Composite, 1)).await.unwrap();
        repo.save(&report_at("u2", ReportKind::Composite, 0)).await.unwrap();

        let listed = repo.list_by_user(&user("u1")).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].kind, ReportKind::Composite);
        assert_eq!(listed[1].kind, ReportKind::Framework(Framework::Disc));
    }

    #[tokio::test]
    async fn find_missing_report_returns_none() {
        let repo = InMemoryReportRepository::new();
        assert!(repo
            .find(&user("u1"), ReportKind::Composite)
            .await
            .unwrap()
            .is_none());
    }
}

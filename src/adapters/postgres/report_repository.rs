//! PostgreSQL implementation of ReportRepository.
//!
//! Reports live in `assessment_report`, one row per `(user_id, report_kind)`
//! enforced by a unique constraint. The payload is stored as JSON text.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, ReportId, Timestamp, UserId};
use crate::ports::{ReportKind, ReportRepository, StoredReport};

pub struct PostgresReportRepository {
    pool: PgPool,
}

impl PostgresReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a stored report.
#[derive(Debug, sqlx::FromRow)]
struct ReportRow {
    id: Uuid,
    user_id: String,
    report_kind: String,
    payload: String,
    generated_at: DateTime<Utc>,
}

impl TryFrom<ReportRow> for StoredReport {
    type Error = DomainError;

    fn try_from(row: ReportRow) -> Result<Self, Self::Error> {
        let kind: ReportKind = row.report_kind.parse().map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid report kind: {}", e))
        })?;
        let payload = serde_json::from_str(&row.payload).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid report payload: {}", e))
        })?;

        Ok(StoredReport {
            id: ReportId::from_uuid(row.id),
            user_id: UserId::new(row.user_id).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
            })?,
            kind,
            payload,
            generated_at: Timestamp::from_datetime(row.generated_at),
        })
    }
}

#[async_trait]
impl ReportRepository for PostgresReportRepository {
    async fn save(&self, report: &StoredReport) -> Result<(), DomainError> {
        let payload = serde_json::to_string(&report.payload).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Failed to encode report: {}", e))
        })?;

        sqlx::query(
            r#"
            INSERT INTO assessment_report (id, user_id, report_kind, payload, generated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, report_kind) DO UPDATE SET
                id = EXCLUDED.id,
                payload = EXCLUDED.payload,
                generated_at = EXCLUDED.generated_at
            "#,
        )
        .bind(report.id.as_uuid())
        .bind(report.user_id.as_str())
        .bind(report.kind.code())
        .bind(payload)
        .bind(report.generated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to save report: {}", e))
        })?;

        Ok(())
    }

    async fn find(
        &self,
        user_id: &UserId,
        kind: ReportKind,
    ) -> Result<Option<StoredReport>, DomainError> {
        let row: Option<ReportRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, report_kind, payload, generated_at
            FROM assessment_report
            WHERE user_id = $1 AND report_kind = $2
            "#,
        )
        .bind(user_id.as_str())
        .bind(kind.code())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find report: {}", e))
        })?;

        row.map(StoredReport::try_from).transpose()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<StoredReport>, DomainError> {
        let rows: Vec<ReportRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, report_kind, payload, generated_at
            FROM assessment_report
            WHERE user_id = $1
            ORDER BY generated_at DESC, report_kind ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list reports: {}", e))
        })?;

        rows.into_iter().map(StoredReport::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Framework;
    use serde_json::json;

    fn row(kind: &str, payload: &str) -> ReportRow {
        ReportRow {
            id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            report_kind: kind.to_string(),
            payload: payload.to_string(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn row_converts_to_stored_report() {
        let report = StoredReport::try_from(row("DISC", r#"{"code":"D"}"#)).unwrap();
        assert_eq!(report.kind, ReportKind::Framework(Framework::Disc));
        assert_eq!(report.payload, json!({"code": "D"}));
    }

    #[test]
    fn unknown_kind_is_a_database_error() {
        let err = StoredReport::try_from(row("HOROSCOPE", "{}")).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn corrupt_payload_is_a_database_error() {
        let err = StoredReport::try_from(row("COMPOSITE", "{oops")).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}

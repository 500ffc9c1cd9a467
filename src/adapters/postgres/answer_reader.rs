//! PostgreSQL implementation of AnswerReader.
//!
//! Reads `test_answer` rows joined with their `test_question`. The question
//! bank stores `options` and `weight` as JSON text; both are passed through
//! unparsed when they are not valid JSON so the aggregator can skip the
//! answer instead of failing the fetch.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::domain::assessment::{AnswerRecord, Framework};
use crate::domain::foundation::{DomainError, ErrorCode, QuestionId, UserId};
use crate::ports::AnswerReader;

pub struct PostgresAnswerReader {
    pool: PgPool,
}

impl PostgresAnswerReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an answer joined with its question.
#[derive(Debug, sqlx::FromRow)]
struct AnswerRow {
    question_id: i64,
    answer: String,
    category: String,
    options: String,
    weight: String,
    is_reverse: bool,
}

impl From<AnswerRow> for AnswerRecord {
    fn from(row: AnswerRow) -> Self {
        AnswerRecord {
            question_id: Some(QuestionId::new(row.question_id)),
            answer_text: row.answer,
            category: row.category,
            weight: json_or_raw(row.weight),
            options: json_or_raw(row.options),
            is_reverse: row.is_reverse,
        }
    }
}

fn json_or_raw(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

#[async_trait]
impl AnswerReader for PostgresAnswerReader {
    async fn get_answers(
        &self,
        user_id: &UserId,
        framework: Framework,
    ) -> Result<Vec<AnswerRecord>, DomainError> {
        let aliases: Vec<String> = framework
            .storage_aliases()
            .iter()
            .map(|a| a.to_string())
            .collect();

        let rows: Vec<AnswerRow> = sqlx::query_as(
            r#"
            SELECT q.id::BIGINT AS question_id, a.answer, q.category, q.options, q.weight,
                   COALESCE(q.is_reverse, FALSE) AS is_reverse
            FROM test_answer a
            JOIN test_question q ON q.id = a.question_id
            WHERE a.user_id = $1 AND UPPER(q.test_type) = ANY($2)
            ORDER BY a.id ASC
            "#,
        )
        .bind(user_id.as_str())
        .bind(&aliases)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to fetch answers: {}", e))
        })?;

        tracing::debug!(
            user_id = %user_id,
            framework = %framework,
            count = rows.len(),
            "Fetched answers"
        );

        Ok(rows.into_iter().map(AnswerRecord::from).collect())
    }
}

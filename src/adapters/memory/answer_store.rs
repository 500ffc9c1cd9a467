//! In-Memory Answer Store Adapter
//!
//! Holds answers per (user, framework) in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::{AnswerRecord, Framework};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AnswerReader;

/// In-memory answer store
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnswerStore {
    answers: Arc<RwLock<HashMap<(UserId, Framework), Vec<AnswerRecord>>>>,
}

impl InMemoryAnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends answers for a user and framework.
    pub async fn submit(
        &self,
        user_id: &UserId,
        framework: Framework,
        answers: impl IntoIterator<Item = AnswerRecord>,
    ) {
        let mut store = self.answers.write().await;
        store
            .entry((user_id.clone(), framework))
            .or_default()
            .extend(answers);
    }

    /// Clear all stored answers (useful for tests)
    pub async fn clear(&self) {
        self.answers.write().await.clear();
    }

    pub async fn answer_count(&self, user_id: &UserId, framework: Framework) -> usize {
        self.answers
            .read()
            .await
            .get(&(user_id.clone(), framework))
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl AnswerReader for InMemoryAnswerStore {
    async fn get_answers(
        &self,
        user_id: &UserId,
        framework: Framework,
    ) -> Result<Vec<AnswerRecord>, DomainError> {
        let store = self.answers.read().await;
        Ok(store
            .get(&(user_id.clone(), framework))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[tokio::test]
    async fn unknown_user_has_no_answers() {
        let store = InMemoryAnswerStore::new();
        let answers = store.get_answers(&user(), Framework::Mbti).await.unwrap();
        assert!(answers.is_empty());
    }

    #[tokio::test]
    async fn answers_are_kept_per_framework() {
        let store = InMemoryAnswerStore::new();
        store
            .submit(
                &user(),
                Framework::Disc,
                vec![AnswerRecord::new("Yes", "D", ["Yes", "No"], json!([1, 0]))],
            )
            .await;

        assert_eq!(store.answer_count(&user(), Framework::Disc).await, 1);
        assert!(store
            .get_answers(&user(), Framework::Mbti)
            .await
            .unwrap()
            .is_empty());

        store.clear().await;
        assert_eq!(store.answer_count(&user(), Framework::Disc).await, 0);
    }
}

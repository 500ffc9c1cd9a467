//! AnswerReader port - Fetches a user's answers joined with question metadata.

use async_trait::async_trait;

use crate::domain::assessment::{AnswerRecord, Framework};
use crate::domain::foundation::{DomainError, UserId};

/// Read access to submitted answers.
///
/// Answers are created by the external submission flow; the engine only
/// reads them.
#[async_trait]
pub trait AnswerReader: Send + Sync {
    /// Answers for one framework, each joined with its question's category,
    /// weight, options and reverse flag.
    ///
    /// Returns an empty list, not an error, when the user has not started
    /// that framework.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` when the store cannot be queried
    async fn get_answers(
        &self,
        user_id: &UserId,
        framework: Framework,
    ) -> Result<Vec<AnswerRecord>, DomainError>;
}

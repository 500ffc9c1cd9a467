//! Assessment errors.
//!
//! Data-shape errors (`OptionMismatch`, `MalformedWeightData`) are recovered
//! per answer by the aggregator. Completeness errors are surfaced to callers.

use thiserror::Error;

use super::Framework;
use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    #[error("answer '{answer}' is not one of the question's options")]
    OptionMismatch { answer: String },

    #[error("malformed weight data: {reason}")]
    MalformedWeightData { reason: String },

    #[error("no answers recorded for the {framework} assessment")]
    NoAnswersForFramework { framework: Framework },

    #[error("complete at least one assessment first")]
    NoCompletedAssessments,
}

impl AssessmentError {
    pub fn option_mismatch(answer: impl Into<String>) -> Self {
        AssessmentError::OptionMismatch {
            answer: answer.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        AssessmentError::MalformedWeightData {
            reason: reason.into(),
        }
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        match &err {
            AssessmentError::NoAnswersForFramework { framework } => {
                DomainError::new(ErrorCode::AssessmentNotCompleted, err.to_string())
                    .with_detail("test_type", framework.code())
            }
            AssessmentError::NoCompletedAssessments => {
                DomainError::new(ErrorCode::NoCompletedAssessments, err.to_string())
            }
            AssessmentError::OptionMismatch { .. } | AssessmentError::MalformedWeightData { .. } => {
                DomainError::new(ErrorCode::ValidationFailed, err.to_string())
            }
        }
    }
}

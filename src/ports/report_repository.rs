//! ReportRepository port - Persists generated reports.
//!
//! Reports are derived data. Saving a report for a `(user, kind)` pair that
//! already has one replaces it, so concurrent regeneration is last write wins.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::assessment::Framework;
use crate::domain::foundation::{DomainError, ReportId, Timestamp, UserId, ValidationError};

/// Which report a stored payload holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ReportKind {
    Framework(Framework),
    Composite,
}

impl ReportKind {
    pub const COMPOSITE_CODE: &'static str = "COMPOSITE";

    pub fn code(&self) -> &'static str {
        match self {
            ReportKind::Framework(f) => f.code(),
            ReportKind::Composite => Self::COMPOSITE_CODE,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ReportKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::COMPOSITE_CODE) {
            return Ok(ReportKind::Composite);
        }
        s.parse::<Framework>().map(ReportKind::Framework)
    }
}

impl TryFrom<String> for ReportKind {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReportKind> for String {
    fn from(kind: ReportKind) -> Self {
        kind.code().to_string()
    }
}

/// A generated report as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReport {
    pub id: ReportId,
    pub user_id: UserId,
    pub kind: ReportKind,
    /// Serialized `Classification` or `CompositeReport`.
    pub payload: serde_json::Value,
    pub generated_at: Timestamp,
}

impl StoredReport {
    pub fn new(user_id: UserId, kind: ReportKind, payload: serde_json::Value) -> Self {
        Self {
            id: ReportId::new(),
            user_id,
            kind,
            payload,
            generated_at: Timestamp::now(),
        }
    }
}

/// Repository port for generated reports.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Saves a report, replacing any earlier report of the same kind for the
    /// same user.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, report: &StoredReport) -> Result<(), DomainError>;

    /// Latest report of one kind for a user.
    ///
    /// Returns `None` if none was generated yet.
    async fn find(
        &self,
        user_id: &UserId,
        kind: ReportKind,
    ) -> Result<Option<StoredReport>, DomainError>;

    /// All reports for a user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<StoredReport>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_kind_round_trips_through_its_code() {
        for kind in [
            ReportKind::Composite,
            ReportKind::Framework(Framework::Mbti),
            ReportKind::Framework(Framework::BigFive),
        ] {
            assert_eq!(kind.code().parse::<ReportKind>().unwrap(), kind);
        }
    }

    #[test]
    fn report_kind_parses_case_insensitively() {
        assert_eq!("composite".parse::<ReportKind>().unwrap(), ReportKind::Composite);
        assert_eq!(
            "Enneagram".parse::<ReportKind>().unwrap(),
            ReportKind::Framework(Framework::Enneagram)
        );
        assert!("ASTROLOGY".parse::<ReportKind>().is_err());
    }

    #[test]
    fn report_kind_serializes_as_code() {
        let json = serde_json::to_value(ReportKind::Framework(Framework::Disc)).unwrap();
        assert_eq!(json, serde_json::json!("DISC"));
    }
}

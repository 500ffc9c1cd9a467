//! Psychometric frameworks supported by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the four supported assessment frameworks.
///
/// The declaration order is the presentation order used by composite
/// reports: MBTI, DISC, Big Five, Enneagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Framework {
    #[serde(rename = "MBTI")]
    Mbti,
    #[serde(rename = "DISC")]
    Disc,
    #[serde(rename = "BIG5", alias = "Big5", alias = "BigFive")]
    BigFive,
    #[serde(rename = "ENNEAGRAM", alias = "Enneagram")]
    Enneagram,
}

impl Framework {
    /// All frameworks in presentation order.
    pub const ALL: [Framework; 4] = [
        Framework::Mbti,
        Framework::Disc,
        Framework::BigFive,
        Framework::Enneagram,
    ];

    /// Canonical upper-case code used in storage and report payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Framework::Mbti => "MBTI",
            Framework::Disc => "DISC",
            Framework::BigFive => "BIG5",
            Framework::Enneagram => "ENNEAGRAM",
        }
    }

    /// Human readable name for narrative text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Mbti => "MBTI",
            Framework::Disc => "DISC",
            Framework::BigFive => "Big Five",
            Framework::Enneagram => "Enneagram",
        }
    }

    /// Upper-case spellings of `test_type` that question banks use for this
    /// framework.
    pub fn storage_aliases(&self) -> &'static [&'static str] {
        match self {
            Framework::Mbti => &["MBTI"],
            Framework::Disc => &["DISC"],
            Framework::BigFive => &["BIG5", "BIGFIVE", "BIG_FIVE", "BIG-FIVE"],
            Framework::Enneagram => &["ENNEAGRAM"],
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Framework {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("test_type"));
        }
        Framework::ALL
            .into_iter()
            .find(|f| f.storage_aliases().contains(&normalized.as_str()))
            .ok_or_else(|| {
                ValidationError::invalid_format("test_type", format!("unknown framework '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_spelling_used_by_question_banks() {
        assert_eq!("MBTI".parse::<Framework>().unwrap(), Framework::Mbti);
        assert_eq!("disc".parse::<Framework>().unwrap(), Framework::Disc);
        assert_eq!("Big5".parse::<Framework>().unwrap(), Framework::BigFive);
        assert_eq!("BIG5".parse::<Framework>().unwrap(), Framework::BigFive);
        assert_eq!("big-five".parse::<Framework>().unwrap(), Framework::BigFive);
        assert_eq!(
            " Enneagram ".parse::<Framework>().unwrap(),
            Framework::Enneagram
        );
    }

    #[test]
    fn rejects_unknown_framework() {
        let err = "HEXACO".parse::<Framework>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn rejects_empty_framework() {
        let err = "".parse::<Framework>().unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { .. }));
    }

    #[test]
    fn serializes_as_code_and_accepts_legacy_names() {
        assert_eq!(serde_json::to_string(&Framework::BigFive).unwrap(), "\"BIG5\"");
        let parsed: Framework = serde_json::from_str("\"Big5\"").unwrap();
        assert_eq!(parsed, Framework::BigFive);
    }

    #[test]
    fn ordering_matches_presentation_order() {
        let mut shuffled = vec![Framework::Enneagram, Framework::Mbti, Framework::BigFive, Framework::Disc];
        shuffled.sort();
        assert_eq!(shuffled, Framework::ALL.to_vec());
    }
}

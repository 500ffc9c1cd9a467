//! Lookup catalog - descriptive tables keyed by classification code.
//!
//! The catalog only feeds presentation: descriptions, strengths, careers and
//! narrative phrases. Scoring never reads it. Tables are loaded from YAML by
//! `adapters::catalog` and checked with [`LookupCatalog::validate`].

mod tables;

pub use tables::{
    ArchetypeEntry, BalancedProfile, BigFiveTable, CompositeTable, DiscTable, EnneagramEntry,
    EnneagramTable, InsightFallbacks, MbtiEntry, MbtiTable, Profile, TraitBandEntry, TraitEntry,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::assessment::{BigFiveTrait, DiscStyle, EnneagramType, Pole};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("failed to read catalog '{path}': {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse catalog: {0}")]
    Parse(String),

    #[error("catalog is missing entries: {}", .missing.join(", "))]
    Incomplete { missing: Vec<String> },
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(ErrorCode::CatalogError, err.to_string())
    }
}

/// The 16 MBTI codes every catalog must describe.
pub const MBTI_CODES: [&str; 16] = [
    "INTJ", "INTP", "ENTJ", "ENTP", "INFJ", "INFP", "ENFJ", "ENFP", "ISTJ", "ISFJ", "ESTJ",
    "ESFJ", "ISTP", "ISFP", "ESTP", "ESFP",
];

/// Big Five archetype keys, in rule precedence order.
pub const BIG_FIVE_ARCHETYPES: [&str; 5] = [
    "social_leader",
    "creative_leader",
    "reliable_executor",
    "reliable_collaborator",
    "balanced",
];

/// Health level keys for the Enneagram heuristic.
pub const HEALTH_LEVELS: [&str; 3] = ["integrated", "average", "developing"];

/// All descriptive tables shared by the resolvers and the synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupCatalog {
    pub version: String,
    /// Fallback used when a code is missing from its table.
    pub unknown: Profile,
    pub mbti: MbtiTable,
    pub disc: DiscTable,
    pub big_five: BigFiveTable,
    pub enneagram: EnneagramTable,
    pub composite: CompositeTable,
}

impl LookupCatalog {
    /// Checks that every classification code has an entry.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut missing = Vec::new();

        for code in MBTI_CODES {
            if !self.mbti.types.contains_key(code) {
                missing.push(format!("mbti.types.{}", code));
            }
        }
        for &style in DiscStyle::all() {
            if !self.disc.styles.contains_key(style.code()) {
                missing.push(format!("disc.styles.{}", style.code()));
            }
        }
        for t in BigFiveTrait::ALL {
            if !self.big_five.traits.contains_key(t.code()) {
                missing.push(format!("big_five.traits.{}", t.code()));
            }
        }
        for key in BIG_FIVE_ARCHETYPES {
            if !self.big_five.archetypes.contains_key(key) {
                missing.push(format!("big_five.archetypes.{}", key));
            }
        }
        for t in EnneagramType::ALL {
            if !self.enneagram.types.contains_key(t.code()) {
                missing.push(format!("enneagram.types.{}", t.code()));
            }
        }
        for key in HEALTH_LEVELS {
            if !self.enneagram.health_levels.contains_key(key) {
                missing.push(format!("enneagram.health_levels.{}", key));
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Incomplete { missing })
        }
    }

    pub fn mbti_type(&self, code: &str) -> Option<&MbtiEntry> {
        self.mbti.types.get(code)
    }

    pub fn disc_style(&self, style: DiscStyle) -> Option<&Profile> {
        self.disc.styles.get(style.code())
    }

    /// Dual-style label such as "DI"; styles are ordered D, I, S, C.
    pub fn disc_combination(&self, a: DiscStyle, b: DiscStyle) -> Option<&String> {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let key = format!("{}{}", first.code(), second.code());
        self.disc.combinations.get(&key)
    }

    pub fn big_five_trait(&self, t: BigFiveTrait) -> Option<&TraitEntry> {
        self.big_five.traits.get(t.code())
    }

    pub fn enneagram_type(&self, t: EnneagramType) -> Option<&EnneagramEntry> {
        self.enneagram.types.get(t.code())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::LookupCatalog;

    /// The catalog shipped with the service.
    pub fn catalog() -> LookupCatalog {
        serde_yaml::from_str(include_str!("../../../data/catalog.yaml"))
            .expect("embedded catalog parses")
    }
}

//! Insight rule chains.
//!
//! Each chain is an ordered table of `(signal, phrase key)`. A signal is a
//! flag derived from one classification; phrase keys are looked up in the
//! catalog's composite table. No match yields the catalog's "balanced"
//! fallback.

use std::collections::BTreeMap;

use super::Insight;
use crate::domain::assessment::{
    BigFiveTrait, Classification, DiscStyle, FrameworkDetail, MbtiPole, TraitBand,
};

/// A flag derived from one framework's classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The MBTI type contains this letter.
    MbtiHas(MbtiPole),
    DiscPrimary(DiscStyle),
    BigFiveBand(BigFiveTrait, TraitBand),
    /// The Enneagram primary type number.
    EnneagramPrimary(u8),
}

impl Signal {
    pub fn holds(&self, classifications: &[Classification]) -> bool {
        classifications.iter().any(|c| match (self, &c.detail) {
            (Signal::MbtiHas(pole), FrameworkDetail::Mbti(d)) => d.has(*pole),
            (Signal::DiscPrimary(style), FrameworkDetail::Disc(d)) => d.primary == *style,
            (Signal::BigFiveBand(t, band), FrameworkDetail::BigFive(d)) => d.band(*t) == *band,
            (Signal::EnneagramPrimary(n), FrameworkDetail::Enneagram(d)) => {
                d.primary_type.number() == *n
            }
            _ => false,
        })
    }
}

pub type RuleChain = &'static [(Signal, &'static str)];

pub const LEADERSHIP_RULES: RuleChain = &[
    (Signal::MbtiHas(MbtiPole::Judging), "structured"),
    (Signal::MbtiHas(MbtiPole::Perceiving), "adaptive"),
    (Signal::MbtiHas(MbtiPole::Intuition), "visionary"),
    (Signal::DiscPrimary(DiscStyle::Dominance), "direct"),
    (Signal::DiscPrimary(DiscStyle::Influence), "inspirational"),
    (Signal::DiscPrimary(DiscStyle::Steadiness), "supportive"),
    (Signal::DiscPrimary(DiscStyle::Conscientiousness), "expert"),
    (Signal::BigFiveBand(BigFiveTrait::Extraversion, TraitBand::High), "social"),
    (Signal::BigFiveBand(BigFiveTrait::Conscientiousness, TraitBand::High), "dependable"),
    (Signal::EnneagramPrimary(8), "protective"),
    (Signal::EnneagramPrimary(3), "achievement"),
];

pub const COMMUNICATION_RULES: RuleChain = &[
    (Signal::MbtiHas(MbtiPole::Extraversion), "expressive"),
    (Signal::MbtiHas(MbtiPole::Introversion), "reflective"),
    (Signal::MbtiHas(MbtiPole::Thinking), "logical"),
    (Signal::MbtiHas(MbtiPole::Feeling), "empathetic"),
    (Signal::DiscPrimary(DiscStyle::Dominance), "concise"),
    (Signal::DiscPrimary(DiscStyle::Influence), "enthusiastic"),
    (Signal::DiscPrimary(DiscStyle::Steadiness), "patient"),
    (Signal::DiscPrimary(DiscStyle::Conscientiousness), "precise"),
    (Signal::BigFiveBand(BigFiveTrait::Agreeableness, TraitBand::High), "diplomatic"),
    (Signal::EnneagramPrimary(8), "candid"),
];

pub const WORK_ENVIRONMENT_RULES: RuleChain = &[
    (Signal::MbtiHas(MbtiPole::Judging), "organized"),
    (Signal::MbtiHas(MbtiPole::Perceiving), "flexible"),
    (Signal::MbtiHas(MbtiPole::Intuition), "innovative"),
    (Signal::MbtiHas(MbtiPole::Sensing), "practical"),
    (Signal::DiscPrimary(DiscStyle::Dominance), "fast_paced"),
    (Signal::DiscPrimary(DiscStyle::Influence), "collaborative"),
    (Signal::DiscPrimary(DiscStyle::Steadiness), "stable"),
    (Signal::DiscPrimary(DiscStyle::Conscientiousness), "quality_focused"),
    (Signal::BigFiveBand(BigFiveTrait::Openness, TraitBand::High), "creative"),
    (Signal::BigFiveBand(BigFiveTrait::Conscientiousness, TraitBand::High), "structured"),
    (Signal::BigFiveBand(BigFiveTrait::Neuroticism, TraitBand::High), "low_pressure"),
    (Signal::BigFiveBand(BigFiveTrait::Extraversion, TraitBand::Low), "independent"),
];

/// Evaluates a chain and joins every matching phrase.
///
/// Phrase keys missing from `phrases` are skipped.
pub fn evaluate(
    chain: RuleChain,
    classifications: &[Classification],
    phrases: &BTreeMap<String, String>,
    fallback: &str,
) -> Insight {
    let mut traits: Vec<String> = Vec::new();
    for (signal, key) in chain {
        if !signal.holds(classifications) {
            continue;
        }
        match phrases.get(*key) {
            Some(phrase) if !traits.contains(phrase) => traits.push(phrase.clone()),
            Some(_) => {}
            None => tracing::debug!(key = *key, "Insight phrase missing from catalog"),
        }
    }

    if traits.is_empty() {
        return Insight {
            primary_style: fallback.to_string(),
            traits,
        };
    }
    Insight {
        primary_style: traits.join(", "),
        traits,
    }
}

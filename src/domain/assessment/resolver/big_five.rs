//! Big Five band and archetype resolution.
//!
//! Each trait average is banded against the configured thresholds, then a set
//! of ordered rule tables picks the archetype, career group, work style and
//! social style. The first rule whose conditions all hold wins.

use std::collections::BTreeMap;

use crate::domain::assessment::{
    BigFiveArchetype, BigFiveDetail, BigFiveTrait, Classification, Framework, FrameworkDetail,
    ScoringRules, TraitAverages, TraitBand, TraitDescriptor,
};
use crate::domain::catalog::{LookupCatalog, TraitBandEntry};

use BigFiveTrait::{Agreeableness, Conscientiousness, Extraversion, Neuroticism, Openness};
use TraitBand::{High, Low};

type Condition = (BigFiveTrait, TraitBand);

const ARCHETYPE_RULES: &[(BigFiveArchetype, &[Condition])] = &[
    (BigFiveArchetype::SocialLeader, &[(Extraversion, High), (Agreeableness, High)]),
    (BigFiveArchetype::CreativeLeader, &[(Openness, High), (Extraversion, High)]),
    (BigFiveArchetype::ReliableExecutor, &[(Conscientiousness, High), (Neuroticism, Low)]),
    (BigFiveArchetype::ReliableCollaborator, &[(Agreeableness, High), (Conscientiousness, High)]),
];

const CAREER_GROUP_RULES: &[(&str, &[Condition])] = &[
    ("creative", &[(Openness, High), (Extraversion, High)]),
    ("people", &[(Extraversion, High), (Agreeableness, High)]),
    ("structured", &[(Conscientiousness, High)]),
    ("care", &[(Agreeableness, High)]),
];
const CAREER_GROUP_DEFAULT: &str = "independent";

const WORK_STYLE_RULES: &[(&str, &[Condition])] = &[
    ("efficient_leader", &[(Extraversion, High), (Conscientiousness, High)]),
    ("creative_leader", &[(Openness, High), (Extraversion, High)]),
    ("reliable_executor", &[(Conscientiousness, High)]),
];
const WORK_STYLE_DEFAULT: &str = "adaptive";

const SOCIAL_STYLE_RULES: &[(&str, &[Condition])] = &[
    ("warm_outgoing", &[(Extraversion, High), (Agreeableness, High)]),
    ("outgoing", &[(Extraversion, High)]),
    ("gentle_cooperative", &[(Agreeableness, High)]),
];
const SOCIAL_STYLE_DEFAULT: &str = "independent";

/// Bands one average. A trait with no answers stays moderate.
///
/// # Edge Cases
///
/// - Averages exactly on a threshold are moderate; both bounds are strict.
pub fn band(average: f64, answered: u32, rules: &ScoringRules) -> TraitBand {
    if answered == 0 {
        TraitBand::Moderate
    } else if average > rules.trait_high_threshold {
        TraitBand::High
    } else if average < rules.trait_low_threshold {
        TraitBand::Low
    } else {
        TraitBand::Moderate
    }
}

pub fn bands(scores: &TraitAverages, rules: &ScoringRules) -> BTreeMap<BigFiveTrait, TraitBand> {
    BigFiveTrait::ALL
        .iter()
        .map(|&t| (t, band(scores.average(t), scores.count(t), rules)))
        .collect()
}

fn holds(conditions: &[Condition], bands: &BTreeMap<BigFiveTrait, TraitBand>) -> bool {
    conditions
        .iter()
        .all(|(t, expected)| bands.get(t) == Some(expected))
}

fn first_match<K: Copy>(rules: &[(K, &[Condition])], bands: &BTreeMap<BigFiveTrait, TraitBand>) -> Option<K> {
    rules
        .iter()
        .find(|(_, conditions)| holds(conditions, bands))
        .map(|(key, _)| *key)
}

pub fn archetype(bands: &BTreeMap<BigFiveTrait, TraitBand>) -> BigFiveArchetype {
    first_match(ARCHETYPE_RULES, bands).unwrap_or(BigFiveArchetype::Balanced)
}

pub fn career_group(bands: &BTreeMap<BigFiveTrait, TraitBand>) -> &'static str {
    first_match(CAREER_GROUP_RULES, bands).unwrap_or(CAREER_GROUP_DEFAULT)
}

pub fn work_style(bands: &BTreeMap<BigFiveTrait, TraitBand>) -> &'static str {
    first_match(WORK_STYLE_RULES, bands).unwrap_or(WORK_STYLE_DEFAULT)
}

pub fn social_style(bands: &BTreeMap<BigFiveTrait, TraitBand>) -> &'static str {
    first_match(SOCIAL_STYLE_RULES, bands).unwrap_or(SOCIAL_STYLE_DEFAULT)
}

pub(super) fn resolve(
    scores: &TraitAverages,
    catalog: &LookupCatalog,
    rules: &ScoringRules,
) -> Classification {
    let bands = bands(scores, rules);
    let table = &catalog.big_five;

    let mut descriptors = Vec::with_capacity(BigFiveTrait::ALL.len());
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut development = Vec::new();

    for t in BigFiveTrait::ALL {
        let band = bands.get(&t).copied().unwrap_or(TraitBand::Moderate);
        let entry: Option<&TraitBandEntry> = catalog.big_five_trait(t).and_then(|e| match band {
            TraitBand::High => Some(&e.high),
            TraitBand::Low => Some(&e.low),
            TraitBand::Moderate => None,
        });

        if let Some(entry) = entry {
            strengths.extend(entry.strength.clone());
            weaknesses.extend(entry.weakness.clone());
            development.extend(entry.development.clone());
        }
        descriptors.push(TraitDescriptor {
            trait_name: t,
            average: scores.average(t),
            band,
            descriptor: entry.map(|e| e.descriptor.clone()),
        });
    }

    if strengths.is_empty() {
        strengths = table.balanced.strengths.clone();
    }
    if weaknesses.is_empty() {
        weaknesses = table.balanced.weaknesses.clone();
    }
    if development.is_empty() {
        development = table.balanced.development.clone();
    }

    let summary = {
        let parts: Vec<&str> = descriptors
            .iter()
            .filter_map(|d| d.descriptor.as_deref())
            .collect();
        if parts.is_empty() {
            table.balanced.summary.clone()
        } else {
            parts.join("; ")
        }
    };

    let archetype = archetype(&bands);
    let (title, description) = table
        .archetypes
        .get(archetype.key())
        .map(|a| (a.label.clone(), a.description.clone()))
        .unwrap_or_else(|| (catalog.unknown.title.clone(), catalog.unknown.description.clone()));

    let dimension_scores = BigFiveTrait::ALL
        .iter()
        .map(|&t| (t.code().to_string(), scores.average(t)))
        .collect();

    Classification {
        framework: Framework::BigFive,
        code: archetype.key().to_string(),
        title,
        description,
        dimension_scores,
        strengths,
        weaknesses,
        career_suggestions: table
            .career_groups
            .get(career_group(&bands))
            .cloned()
            .unwrap_or_default(),
        development_suggestions: development,
        communication_style: None,
        work_style: table.work_styles.get(work_style(&bands)).cloned(),
        detail: FrameworkDetail::BigFive(BigFiveDetail {
            descriptors,
            archetype,
            social_style: table.social_styles.get(social_style(&bands)).cloned(),
            summary,
        }),
    }
}

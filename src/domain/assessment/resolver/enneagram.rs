//! Enneagram primary type, wing, tritype and health resolution.

use std::collections::BTreeMap;

use crate::domain::assessment::{
    Classification, EnneagramDetail, EnneagramType, Framework, FrameworkDetail, HealthLevel,
    ScoringRules, Triad, Tritype, TypeShares,
};
use crate::domain::catalog::LookupCatalog;

/// Highest-count type among `candidates`; ties go to the lowest number.
fn strongest(candidates: &[EnneagramType], scores: &TypeShares) -> EnneagramType {
    let mut best = candidates[0];
    for &t in &candidates[1..] {
        if scores.count(t) > scores.count(best) {
            best = t;
        }
    }
    best
}

/// Primary type. Ties go to the lowest type number.
pub fn primary_type(scores: &TypeShares) -> EnneagramType {
    strongest(&EnneagramType::ALL, scores)
}

/// The neighbour with the strictly higher share, if that share also clears
/// `wing_min_share`.
///
/// # Edge Cases
///
/// - Equal neighbour shares produce no wing.
/// - Type 1 considers 9 and 2; type 9 considers 8 and 1.
pub fn wing(primary: EnneagramType, scores: &TypeShares, rules: &ScoringRules) -> Option<EnneagramType> {
    let (lower, upper) = primary.neighbours();
    let (lower_share, upper_share) = (scores.share(lower).value(), scores.share(upper).value());

    let (candidate, share) = if lower_share > upper_share {
        (lower, lower_share)
    } else if upper_share > lower_share {
        (upper, upper_share)
    } else {
        return None;
    };

    (share > rules.wing_min_share).then_some(candidate)
}

/// Dominant type of each center; ties go to the lowest number in the center.
pub fn tritype(scores: &TypeShares) -> Tritype {
    let [body, heart, head] = Triad::ALL.map(|triad| strongest(&triad.members(), scores));
    Tritype { body, heart, head }
}

/// Buckets the mean weight of the primary type's votes.
///
/// Banks that weight every affirmation as `1` always land in
/// `Developing`; only banks whose votes carry scale values (1-5) can
/// reach the higher bands.
pub fn health_level(primary_weight: f64, rules: &ScoringRules) -> HealthLevel {
    if primary_weight >= rules.health_integrated {
        HealthLevel::Integrated
    } else if primary_weight >= rules.health_average {
        HealthLevel::Average
    } else {
        HealthLevel::Developing
    }
}

pub(super) fn resolve(scores: &TypeShares, catalog: &LookupCatalog, rules: &ScoringRules) -> Classification {
    let primary = primary_type(scores);
    let wing = wing(primary, scores, rules);
    let health = health_level(scores.mean_weight(primary), rules);

    let code = match wing {
        Some(w) => format!("{}w{}", primary.number(), w.number()),
        None => primary.code().to_string(),
    };

    let entry = catalog.enneagram_type(primary);
    if entry.is_none() {
        tracing::debug!(code = primary.code(), "Enneagram type missing from catalog, using fallback");
    }
    let profile = entry.map(|e| &e.profile).unwrap_or(&catalog.unknown);
    let (core_fear, core_desire, growth_direction, stress_direction) = entry
        .map(|e| {
            (
                e.core_fear.clone(),
                e.core_desire.clone(),
                e.growth_direction.clone(),
                e.stress_direction.clone(),
            )
        })
        .unwrap_or_default();

    let dimension_scores: BTreeMap<String, f64> = EnneagramType::ALL
        .iter()
        .map(|&t| (t.code().to_string(), scores.share(t).value()))
        .collect();

    Classification {
        framework: Framework::Enneagram,
        code,
        title: profile.title.clone(),
        description: profile.description.clone(),
        dimension_scores,
        strengths: profile.strengths.clone(),
        weaknesses: profile.weaknesses.clone(),
        career_suggestions: profile.careers.clone(),
        development_suggestions: profile.development.clone(),
        communication_style: profile.communication_style.clone(),
        work_style: profile.work_style.clone(),
        detail: FrameworkDetail::Enneagram(EnneagramDetail {
            primary_type: primary,
            wing,
            tritype: tritype(scores),
            health_level: health,
            health_description: catalog
                .enneagram
                .health_levels
                .get(health.key())
                .cloned()
                .unwrap_or_default(),
            core_fear,
            core_desire,
            growth_direction,
            stress_direction,
        }),
    }
}

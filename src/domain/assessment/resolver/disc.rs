//! DISC primary/secondary style resolution.

use std::collections::BTreeMap;

use crate::domain::assessment::{
    Classification, DiscDetail, DiscStyle, Framework, FrameworkDetail, Pole, PoleScores,
    PreferenceView,
};
use crate::domain::catalog::LookupCatalog;

/// Styles sorted by descending vote count.
///
/// The sort is stable, so tied styles keep the D, I, S, C order.
pub fn rank_styles(scores: &PoleScores<DiscStyle>) -> Vec<(DiscStyle, u32)> {
    let mut ranked: Vec<_> = DiscStyle::all()
        .iter()
        .map(|&s| (s, scores.count(s)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Primary style plus the runner-up, which is only reported when it
/// received at least one vote.
pub fn primary_and_secondary(scores: &PoleScores<DiscStyle>) -> (DiscStyle, Option<DiscStyle>) {
    let ranked = rank_styles(scores);
    let primary = ranked
        .first()
        .map(|&(s, _)| s)
        .unwrap_or(DiscStyle::Dominance);
    let secondary = ranked
        .get(1)
        .filter(|&&(_, count)| count > 0)
        .map(|&(s, _)| s);
    (primary, secondary)
}

pub(super) fn resolve(scores: &PoleScores<DiscStyle>, catalog: &LookupCatalog) -> Classification {
    let (primary, secondary) = primary_and_secondary(scores);

    let profile = catalog.disc_style(primary).unwrap_or_else(|| {
        tracing::debug!(style = primary.code(), "DISC style missing from catalog, using fallback");
        &catalog.unknown
    });

    let dimension_scores: BTreeMap<String, f64> = DiscStyle::all()
        .iter()
        .map(|&s| (s.code().to_string(), scores.intensity(s).value()))
        .collect();
    let counts = DiscStyle::all()
        .iter()
        .map(|&s| (s.code().to_string(), scores.count(s)))
        .collect();
    let combination = secondary.and_then(|s| catalog.disc_combination(primary, s).cloned());

    Classification {
        framework: Framework::Disc,
        code: primary.code().to_string(),
        title: profile.title.clone(),
        description: profile.description.clone(),
        dimension_scores,
        strengths: profile.strengths.clone(),
        weaknesses: profile.weaknesses.clone(),
        career_suggestions: profile.careers.clone(),
        development_suggestions: profile.development.clone(),
        communication_style: profile.communication_style.clone(),
        work_style: profile.work_style.clone(),
        detail: FrameworkDetail::Disc(DiscDetail {
            primary,
            secondary,
            counts,
            preferences: scores.preferences.iter().map(PreferenceView::from).collect(),
            combination,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::fixtures;

    fn scores(d: u32, i: u32, s: u32, c: u32) -> PoleScores<DiscStyle> {
        PoleScores::from_counts(|style| match style {
            DiscStyle::Dominance => d,
            DiscStyle::Influence => i,
            DiscStyle::Steadiness => s,
            DiscStyle::Conscientiousness => c,
        })
    }

    #[test]
    fn tied_leaders_keep_canonical_order() {
        // Scenario: D=5, I=5, S=2, C=0.
        let (primary, secondary) = primary_and_secondary(&scores(5, 5, 2, 0));
        assert_eq!(primary, DiscStyle::Dominance);
        assert_eq!(secondary, Some(DiscStyle::Influence));
    }

    #[test]
    fn zero_runner_up_is_not_reported() {
        let (primary, secondary) = primary_and_secondary(&scores(0, 0, 4, 0));
        assert_eq!(primary, DiscStyle::Steadiness);
        assert_eq!(secondary, None);
    }

    #[test]
    fn classification_carries_intensities_and_profile() {
        let c = resolve(&scores(1, 0, 0, 3), &fixtures::catalog());
        assert_eq!(c.code, "C");
        assert_eq!(c.dimension_scores["C"], 75.0);
        assert_eq!(c.dimension_scores["D"], 25.0);
        assert_eq!(c.title, "Conscientiousness");
        assert!(c.communication_style.is_some());

        let detail = c.disc().unwrap();
        assert_eq!(detail.secondary, Some(DiscStyle::Dominance));
        assert!(detail.combination.is_some());
        assert_eq!(detail.counts["C"], 3);
        assert_eq!(detail.preferences.len(), 2);
    }
}

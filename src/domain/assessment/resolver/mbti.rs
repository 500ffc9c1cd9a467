//! MBTI type resolution.

use std::collections::BTreeMap;

use crate::domain::assessment::{
    Classification, Framework, FrameworkDetail, MbtiDetail, MbtiPole, Pole, PoleScores,
    PreferenceView,
};
use crate::domain::catalog::LookupCatalog;

/// Selected letter for each of the four pairs, in pair order.
///
/// Each pair selects the pole at or above 50%, so an even split resolves to
/// the first-listed pole (E, S, T, J).
pub fn type_letters(scores: &PoleScores<MbtiPole>) -> [MbtiPole; 4] {
    let mut letters = [
        MbtiPole::Extraversion,
        MbtiPole::Sensing,
        MbtiPole::Thinking,
        MbtiPole::Judging,
    ];
    for (slot, pref) in letters.iter_mut().zip(&scores.preferences) {
        *slot = pref.leading();
    }
    letters
}

pub fn type_code(letters: &[MbtiPole; 4]) -> String {
    letters.iter().map(|p| p.code()).collect()
}

pub(super) fn resolve(scores: &PoleScores<MbtiPole>, catalog: &LookupCatalog) -> Classification {
    let letters = type_letters(scores);
    let code = type_code(&letters);

    let (profile, compatible_types) = match catalog.mbti_type(&code) {
        Some(entry) => (&entry.profile, entry.compatible.clone()),
        None => {
            tracing::debug!(code = %code, "MBTI code missing from catalog, using fallback");
            (&catalog.unknown, Vec::new())
        }
    };

    let mut dimension_scores = BTreeMap::new();
    for pref in &scores.preferences {
        dimension_scores.insert(pref.first.code().to_string(), pref.first_percentage.value());
        dimension_scores.insert(pref.second.code().to_string(), pref.second_percentage.value());
    }

    let combinations = [(letters[0], letters[1]), (letters[2], letters[3])]
        .iter()
        .filter_map(|(a, b)| {
            let key = format!("{}{}", a.code(), b.code());
            catalog.mbti.combinations.get(&key).cloned()
        })
        .collect();

    Classification {
        framework: Framework::Mbti,
        title: profile.title.clone(),
        description: profile.description.clone(),
        dimension_scores,
        strengths: profile.strengths.clone(),
        weaknesses: profile.weaknesses.clone(),
        career_suggestions: profile.careers.clone(),
        development_suggestions: profile.development.clone(),
        communication_style: profile.communication_style.clone(),
        work_style: profile.work_style.clone(),
        detail: FrameworkDetail::Mbti(MbtiDetail {
            letters,
            preferences: scores.preferences.iter().map(PreferenceView::from).collect(),
            combinations,
            compatible_types,
        }),
        code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::fixtures;

    fn scores(counts: &[(MbtiPole, u32)]) -> PoleScores<MbtiPole> {
        PoleScores::from_counts(|p| {
            counts
                .iter()
                .find(|(pole, _)| *pole == p)
                .map(|(_, c)| *c)
                .unwrap_or(0)
        })
    }

    #[test]
    fn three_to_one_extraversion_and_unanswered_pairs_resolve_to_estj() {
        // Scenario: E/I split 3-1, S/N 1-0, T/F and J/P unanswered.
        let s = scores(&[
            (MbtiPole::Extraversion, 3),
            (MbtiPole::Introversion, 1),
            (MbtiPole::Sensing, 1),
        ]);
        let c = resolve(&s, &fixtures::catalog());

        assert_eq!(c.code, "ESTJ");
        assert_eq!(c.dimension_scores["E"], 75.0);
        assert_eq!(c.dimension_scores["I"], 25.0);
        assert_eq!(c.dimension_scores["S"], 100.0);
        assert_eq!(c.dimension_scores["N"], 0.0);
        assert_eq!(c.dimension_scores["T"], 50.0);
        assert_eq!(c.dimension_scores["J"], 50.0);
    }

    #[test]
    fn minority_pole_loses() {
        let s = scores(&[
            (MbtiPole::Extraversion, 1),
            (MbtiPole::Introversion, 4),
            (MbtiPole::Intuition, 2),
            (MbtiPole::Feeling, 3),
            (MbtiPole::Thinking, 1),
            (MbtiPole::Perceiving, 5),
        ]);
        assert_eq!(type_code(&type_letters(&s)), "INFP");
    }

    #[test]
    fn catalog_fields_are_attached() {
        let s = scores(&[(MbtiPole::Introversion, 2), (MbtiPole::Intuition, 2)]);
        let c = resolve(&s, &fixtures::catalog());
        assert_eq!(c.code, "INTJ");
        assert_eq!(c.title, "Architect");
        assert!(!c.career_suggestions.is_empty());
        let detail = c.mbti().unwrap();
        assert_eq!(detail.compatible_types, vec!["ENFP", "ENTP"]);
        assert_eq!(detail.combinations.len(), 2);
        assert!(detail.has(MbtiPole::Judging));
    }

    #[test]
    fn missing_catalog_entry_falls_back_to_unknown() {
        let mut catalog = fixtures::catalog();
        catalog.mbti.types.remove("ESTJ");
        let c = resolve(&scores(&[(MbtiPole::Extraversion, 1)]), &catalog);
        assert_eq!(c.code, "ESTJ");
        assert_eq!(c.description, "Unknown type");
        assert!(c.mbti().unwrap().compatible_types.is_empty());
    }
}

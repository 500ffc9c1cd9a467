//! CompositeSynthesizer - Merges completed classifications into one report.

use super::insights::{self, COMMUNICATION_RULES, LEADERSHIP_RULES, WORK_ENVIRONMENT_RULES};
use super::{
    Compatibility, CompositeReport, CompositeSummary, DevelopmentPriorities, IntegratedInsights,
};
use crate::domain::assessment::{AssessmentError, Classification, Framework, SynthesisRules};
use crate::domain::catalog::LookupCatalog;

/// Builds composite reports from zero to four classifications.
///
/// Input order does not matter: classifications are sorted into presentation
/// order (MBTI, DISC, Big Five, Enneagram) and only the first classification
/// of each framework is used.
#[derive(Debug, Clone, Copy)]
pub struct CompositeSynthesizer<'a> {
    catalog: &'a LookupCatalog,
    rules: SynthesisRules,
}

impl<'a> CompositeSynthesizer<'a> {
    pub fn new(catalog: &'a LookupCatalog, rules: SynthesisRules) -> Self {
        Self { catalog, rules }
    }

    /// # Errors
    ///
    /// `NoCompletedAssessments` when `classifications` is empty.
    pub fn synthesize(
        &self,
        classifications: &[Classification],
    ) -> Result<CompositeReport, AssessmentError> {
        let mut ordered: Vec<Classification> = Vec::with_capacity(Framework::ALL.len());
        for framework in Framework::ALL {
            if let Some(c) = classifications.iter().find(|c| c.framework == framework) {
                ordered.push(c.clone());
            }
        }
        if ordered.is_empty() {
            return Err(AssessmentError::NoCompletedAssessments);
        }

        let composite = &self.catalog.composite;
        let integrated_insights = IntegratedInsights {
            leadership_style: insights::evaluate(
                LEADERSHIP_RULES,
                &ordered,
                &composite.leadership,
                &composite.fallbacks.leadership,
            ),
            communication_preferences: insights::evaluate(
                COMMUNICATION_RULES,
                &ordered,
                &composite.communication,
                &composite.fallbacks.communication,
            ),
            work_environment_fit: insights::evaluate(
                WORK_ENVIRONMENT_RULES,
                &ordered,
                &composite.work_environment,
                &composite.fallbacks.work_environment,
            ),
            compatibility: compatibility(&ordered),
        };

        let report = CompositeReport {
            completed_tests: ordered.iter().map(|c| c.framework).collect(),
            overall_analysis: overall_analysis(&ordered),
            career_recommendations: self.career_recommendations(&ordered),
            development_priorities: self.development_priorities(&ordered),
            integrated_insights,
            summary: summary(&ordered),
            classifications: ordered,
        };

        tracing::debug!(
            completed = report.completed_tests.len(),
            careers = report.career_recommendations.len(),
            "Synthesized composite report"
        );
        Ok(report)
    }

    /// Union of each framework's careers, de-duplicated in order and capped.
    fn career_recommendations(&self, ordered: &[Classification]) -> Vec<String> {
        let mut careers = dedup(ordered.iter().flat_map(|c| c.career_suggestions.iter()));
        careers.truncate(self.rules.max_career_recommendations);
        careers
    }

    /// Slices the combined development lists into buckets by position.
    ///
    /// # Edge Cases
    ///
    /// - Items past the medium bucket are dropped; long-term goals always come
    ///   from the catalog.
    fn development_priorities(&self, ordered: &[Classification]) -> DevelopmentPriorities {
        let items = dedup(ordered.iter().flat_map(|c| c.development_suggestions.iter()));
        let size = self.rules.priority_bucket_size;
        let high: Vec<String> = items.iter().take(size).cloned().collect();
        let medium: Vec<String> = items.iter().skip(size).take(size).cloned().collect();

        DevelopmentPriorities {
            high,
            medium,
            long_term: self.catalog.composite.long_term_goals.clone(),
        }
    }
}

fn dedup<'s>(items: impl Iterator<Item = &'s String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

fn overall_analysis(ordered: &[Classification]) -> String {
    ordered
        .iter()
        .map(|c| match c.framework {
            Framework::Mbti => format!(
                "Your MBTI type is {} ({}): {}.",
                c.code, c.title, c.description
            ),
            Framework::Disc => format!(
                "Your primary DISC style is {} ({}): {}.",
                c.code, c.title, c.description
            ),
            Framework::BigFive => {
                let summary = c
                    .big_five()
                    .map(|d| d.summary.as_str())
                    .unwrap_or(c.description.as_str());
                format!("Your Big Five profile is {}: {}.", c.title, summary)
            }
            Framework::Enneagram => format!(
                "Your Enneagram type is {} ({}): {}.",
                c.code, c.title, c.description
            ),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn compatibility(ordered: &[Classification]) -> Compatibility {
    let mut compat = Compatibility::default();
    for c in ordered {
        match c.framework {
            Framework::Mbti => {
                compat.mbti_type = Some(c.code.clone());
                compat.compatible_types = c
                    .mbti()
                    .map(|d| d.compatible_types.clone())
                    .unwrap_or_default();
            }
            Framework::Disc => {
                compat.disc_style = Some(c.code.clone());
                compat.communication_preference = c.communication_style.clone();
            }
            Framework::BigFive | Framework::Enneagram => {}
        }
    }
    compat
}

fn summary(ordered: &[Classification]) -> CompositeSummary {
    let code = |framework: Framework| {
        ordered
            .iter()
            .find(|c| c.framework == framework)
            .map(|c| c.code.clone())
    };
    CompositeSummary {
        mbti_type: code(Framework::Mbti),
        disc_primary: code(Framework::Disc),
        big5_type: code(Framework::BigFive),
        enneagram_type: code(Framework::Enneagram),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{AnswerRecord, AssessmentEngine, EnneagramType, FrameworkDetail};
    use crate::domain::catalog::fixtures;
    use serde_json::json;
    use std::sync::Arc;

    fn engine() -> AssessmentEngine {
        AssessmentEngine::with_defaults(Arc::new(fixtures::catalog()))
    }

    fn vote(category: &str) -> AnswerRecord {
        AnswerRecord::new("Yes", category, ["Yes", "No"], json!([1, 0]))
    }

    fn mbti_intj() -> Classification {
        engine()
            .classify(Framework::Mbti, &[vote("I"), vote("N"), vote("T"), vote("J")])
            .unwrap()
    }

    fn disc_dominant() -> Classification {
        engine()
            .classify(Framework::Disc, &[vote("D"), vote("D"), vote("I")])
            .unwrap()
    }

    fn enneagram_eight() -> Classification {
        let answers = [AnswerRecord::new("是", "類型8", ["是", "否"], json!({"類型8": 1}))];
        engine().classify(Framework::Enneagram, &answers).unwrap()
    }

    #[test]
    fn only_mbti_completed() {
        // Scenario: a lone MBTI classification.
        let mbti = mbti_intj();
        let report = engine().synthesize(&[mbti.clone()]).unwrap();

        assert_eq!(report.completed_tests, vec![Framework::Mbti]);
        assert_eq!(report.career_recommendations, mbti.career_suggestions);
        assert!(report.career_recommendations.len() <= 8);
        assert_eq!(report.summary.mbti_type.as_deref(), Some("INTJ"));
        assert_eq!(report.summary.disc_primary, None);
        assert!(report.overall_analysis.starts_with("Your MBTI type is INTJ"));
        assert_eq!(report.integrated_insights.compatibility.compatible_types, vec!["ENFP", "ENTP"]);
    }

    #[test]
    fn careers_are_deduplicated_and_capped() {
        let mut mbti = mbti_intj();
        mbti.career_suggestions = (0..6).map(|i| format!("Career {}", i)).collect();
        let mut disc = disc_dominant();
        disc.career_suggestions = vec!["Career 0".into(), "Career 6".into(), "Career 7".into(), "Career 8".into()];

        let report = engine().synthesize(&[disc, mbti]).unwrap();
        assert_eq!(report.career_recommendations.len(), 8);
        assert_eq!(report.career_recommendations[0], "Career 0");
        assert_eq!(report.career_recommendations[6], "Career 6");
        assert!(!report.career_recommendations.contains(&"Career 8".to_string()));
    }

    #[test]
    fn frameworks_are_presented_in_canonical_order() {
        let report = engine()
            .synthesize(&[enneagram_eight(), disc_dominant(), mbti_intj()])
            .unwrap();
        assert_eq!(
            report.completed_tests,
            vec![Framework::Mbti, Framework::Disc, Framework::Enneagram]
        );
        assert_eq!(report.summary.enneagram_type.as_deref(), Some("8"));
        let sentences: Vec<&str> = report.overall_analysis.split(". Your").collect();
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn rule_chains_collect_matching_phrases() {
        let report = engine()
            .synthesize(&[mbti_intj(), disc_dominant(), enneagram_eight()])
            .unwrap();
        let leadership = &report.integrated_insights.leadership_style;
        assert!(leadership.traits.contains(&"Structured leadership".to_string()));
        assert!(leadership.traits.contains(&"Visionary leadership".to_string()));
        assert!(leadership.traits.contains(&"Direct leadership".to_string()));
        assert!(leadership.traits.contains(&"Protective leadership".to_string()));
        assert!(leadership.primary_style.starts_with("Structured leadership"));

        let communication = &report.integrated_insights.communication_preferences;
        assert_eq!(communication.traits[0], "Reflective and considered");
        assert_eq!(
            report.integrated_insights.compatibility.disc_style.as_deref(),
            Some("D")
        );
    }

    #[test]
    fn no_matching_rule_falls_back_to_balanced() {
        let mut enneagram = enneagram_eight();
        if let FrameworkDetail::Enneagram(d) = &mut enneagram.detail {
            d.primary_type = EnneagramType::new(5).unwrap();
        }
        let report = engine().synthesize(&[enneagram]).unwrap();
        assert_eq!(report.integrated_insights.leadership_style.primary_style, "Balanced leadership");
        assert!(report.integrated_insights.leadership_style.traits.is_empty());
        assert_eq!(
            report.integrated_insights.work_environment_fit.primary_style,
            "Balanced work environment"
        );
    }

    #[test]
    fn development_items_are_bucketed_by_position() {
        let mut mbti = mbti_intj();
        mbti.development_suggestions = (1..=8).map(|i| format!("Item {}", i)).collect();
        let report = engine().synthesize(&[mbti]).unwrap();
        let p = &report.development_priorities;

        assert_eq!(p.high, vec!["Item 1", "Item 2", "Item 3"]);
        assert_eq!(p.medium, vec!["Item 4", "Item 5", "Item 6"]);
        assert_eq!(p.long_term, fixtures::catalog().composite.long_term_goals);
    }

    #[test]
    fn missing_detail_fields_degrade_gracefully() {
        let mut mbti = mbti_intj();
        mbti.career_suggestions.clear();
        mbti.development_suggestions.clear();
        let report = engine().synthesize(&[mbti]).unwrap();
        assert!(report.career_recommendations.is_empty());
        assert!(report.development_priorities.high.is_empty());
        assert!(report
            .integrated_insights
            .communication_preferences
            .traits
            .contains(&"Logical and objective".to_string()));
    }
}

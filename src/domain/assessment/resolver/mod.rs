//! ClassificationResolver - Turns normalized scores into a Classification.
//!
//! Decision rules live in one module per framework. Descriptive text comes
//! from the [`LookupCatalog`]; a code missing from its table falls back to the
//! catalog's "unknown" profile instead of failing.

pub mod big_five;
pub mod disc;
pub mod enneagram;
pub mod mbti;

use super::{Classification, ScoringRules, TraitScores};
use crate::domain::catalog::LookupCatalog;

/// Applies framework decision rules against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationResolver<'a> {
    catalog: &'a LookupCatalog,
    rules: &'a ScoringRules,
}

impl<'a> ClassificationResolver<'a> {
    pub fn new(catalog: &'a LookupCatalog, rules: &'a ScoringRules) -> Self {
        Self { catalog, rules }
    }

    /// Resolves scores into a classification.
    ///
    /// Returns `None` when the scores carry no signal at all, so callers can
    /// tell "not taken" apart from "scored low".
    pub fn resolve(&self, scores: &TraitScores) -> Option<Classification> {
        if !scores.has_signal() {
            tracing::debug!(framework = %scores.framework(), "No scored answers, no classification");
            return None;
        }

        let classification = match scores {
            TraitScores::Mbti(s) => mbti::resolve(s, self.catalog),
            TraitScores::Disc(s) => disc::resolve(s, self.catalog),
            TraitScores::BigFive(s) => big_five::resolve(s, self.catalog, self.rules),
            TraitScores::Enneagram(s) => enneagram::resolve(s, self.catalog, self.rules),
        };
        Some(classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{
        Aggregation, AnswerAggregator, Framework, TraitScorer,
    };
    use crate::domain::catalog::fixtures;

    #[test]
    fn no_signal_means_no_classification_for_every_framework() {
        let catalog = fixtures::catalog();
        let rules = ScoringRules::default();
        let resolver = ClassificationResolver::new(&catalog, &rules);
        for framework in Framework::ALL {
            let scores = TraitScorer::score(&Aggregation::empty(framework));
            assert_eq!(resolver.resolve(&scores), None, "{}", framework);
        }
    }

    #[test]
    fn skipped_only_answers_yield_no_classification() {
        let catalog = fixtures::catalog();
        let rules = ScoringRules::default();
        let answers = vec![crate::domain::assessment::AnswerRecord::new(
            "Maybe",
            "E",
            ["Yes", "No"],
            serde_json::json!([1, 0]),
        )];
        let agg = AnswerAggregator::new(Framework::Mbti, rules).aggregate(&answers);
        let resolver = ClassificationResolver::new(&catalog, &rules);
        assert!(resolver.resolve(&TraitScorer::score(&agg)).is_none());
    }
}

//! AssessmentEngine - Runs the scoring pipeline end to end.

use std::sync::Arc;

use super::{
    AnswerAggregator, AnswerRecord, AssessmentError, Classification, ClassificationResolver,
    Framework, ScoringRules, SkippedAnswer, SynthesisRules, TraitScorer, TraitScores,
};
use crate::domain::catalog::LookupCatalog;
use crate::domain::synthesis::{CompositeReport, CompositeSynthesizer};

/// Everything computed for one framework from one answer set.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub classification: Classification,
    pub scores: TraitScores,
    /// Answers that contributed to the scores.
    pub accepted: u32,
    /// Answers excluded because their option or weight data was unusable.
    pub skipped: Vec<SkippedAnswer>,
}

/// Stateless pipeline façade, cheap to clone and share across requests.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    catalog: Arc<LookupCatalog>,
    scoring: ScoringRules,
    synthesis: SynthesisRules,
}

impl AssessmentEngine {
    pub fn new(catalog: Arc<LookupCatalog>, scoring: ScoringRules, synthesis: SynthesisRules) -> Self {
        Self {
            catalog,
            scoring,
            synthesis,
        }
    }

    pub fn with_defaults(catalog: Arc<LookupCatalog>) -> Self {
        Self::new(catalog, ScoringRules::default(), SynthesisRules::default())
    }

    pub fn catalog(&self) -> &LookupCatalog {
        &self.catalog
    }

    pub fn scoring_rules(&self) -> &ScoringRules {
        &self.scoring
    }

    /// Aggregates, scores and resolves one framework.
    ///
    /// # Errors
    ///
    /// `NoAnswersForFramework` when no answer could be scored, whether the
    /// list was empty or every answer was skipped.
    pub fn evaluate(
        &self,
        framework: Framework,
        answers: &[AnswerRecord],
    ) -> Result<Evaluation, AssessmentError> {
        let aggregation = AnswerAggregator::new(framework, self.scoring).aggregate(answers);
        let scores = TraitScorer::score(&aggregation);

        let classification = ClassificationResolver::new(&self.catalog, &self.scoring)
            .resolve(&scores)
            .ok_or(AssessmentError::NoAnswersForFramework { framework })?;

        Ok(Evaluation {
            classification,
            scores,
            accepted: aggregation.accepted,
            skipped: aggregation.skipped,
        })
    }

    pub fn classify(
        &self,
        framework: Framework,
        answers: &[AnswerRecord],
    ) -> Result<Classification, AssessmentError> {
        self.evaluate(framework, answers).map(|e| e.classification)
    }

    /// Merges completed classifications into a composite report.
    pub fn synthesize(
        &self,
        classifications: &[Classification],
    ) -> Result<CompositeReport, AssessmentError> {
        CompositeSynthesizer::new(&self.catalog, self.synthesis).synthesize(classifications)
    }
}

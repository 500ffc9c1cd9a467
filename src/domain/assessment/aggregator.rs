//! AnswerAggregator - Accumulates per-dimension totals from raw answers.
//!
//! Every answer is resolved completely before anything is accumulated, so an
//! answer either contributes all of its deltas or none of them. Answers that
//! fail to resolve are logged, recorded in `Aggregation::skipped` and never
//! abort the batch.

use serde::Serialize;
use std::collections::BTreeMap;

use super::weight::{Contribution, SelectedOption, WeightSpec};
use super::{AnswerRecord, AssessmentError, Dimension, Framework, ScoringRules};
use crate::domain::foundation::QuestionId;

/// Running `{total, count}` for one dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DimensionAccumulator {
    pub total: f64,
    pub count: u32,
}

impl DimensionAccumulator {
    pub fn record(&mut self, delta: f64) {
        self.total += delta;
        self.count += 1;
    }

    /// `total / count`, or `None` when nothing was recorded.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total / f64::from(self.count))
    }
}

/// An answer that was excluded from aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedAnswer {
    /// Position of the answer in the input list.
    pub position: usize,
    pub question_id: Option<QuestionId>,
    pub reason: AssessmentError,
}

/// Result of aggregating one user's answers for one framework.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub framework: Framework,
    pub accumulators: BTreeMap<Dimension, DimensionAccumulator>,
    /// Answers that resolved successfully, including abstentions.
    pub accepted: u32,
    pub skipped: Vec<SkippedAnswer>,
}

impl Aggregation {
    pub fn empty(framework: Framework) -> Self {
        Self {
            framework,
            accumulators: BTreeMap::new(),
            accepted: 0,
            skipped: Vec::new(),
        }
    }

    /// Accumulator for a dimension, zeroed when it never received a vote.
    pub fn get(&self, dimension: Dimension) -> DimensionAccumulator {
        self.accumulators
            .get(&dimension)
            .copied()
            .unwrap_or_default()
    }

    pub fn count(&self, dimension: Dimension) -> u32 {
        self.get(dimension).count
    }

    /// Sum of counts across every dimension.
    pub fn total_votes(&self) -> u32 {
        self.accumulators.values().map(|acc| acc.count).sum()
    }
}

/// Turns answer records into per-dimension accumulators for one framework.
#[derive(Debug, Clone, Copy)]
pub struct AnswerAggregator {
    framework: Framework,
    rules: ScoringRules,
}

impl AnswerAggregator {
    pub fn new(framework: Framework, rules: ScoringRules) -> Self {
        Self { framework, rules }
    }

    /// Aggregates answers, skipping any that cannot be resolved.
    pub fn aggregate(&self, answers: &[AnswerRecord]) -> Aggregation {
        let mut aggregation = Aggregation::empty(self.framework);

        for (position, answer) in answers.iter().enumerate() {
            match self.resolve(answer) {
                Ok(contributions) => {
                    // One answer adds at most one count per dimension, even if
                    // two of its labels alias the same dimension.
                    let mut merged: BTreeMap<Dimension, f64> = BTreeMap::new();
                    for c in contributions {
                        *merged.entry(c.dimension).or_insert(0.0) += c.delta;
                    }
                    for (dimension, delta) in merged {
                        aggregation
                            .accumulators
                            .entry(dimension)
                            .or_default()
                            .record(delta);
                    }
                    aggregation.accepted += 1;
                }
                Err(reason) => {
                    tracing::warn!(
                        framework = %self.framework,
                        question_id = ?answer.question_id,
                        position,
                        %reason,
                        "Skipping answer that cannot be scored"
                    );
                    aggregation.skipped.push(SkippedAnswer {
                        position,
                        question_id: answer.question_id,
                        reason,
                    });
                }
            }
        }

        tracing::debug!(
            framework = %self.framework,
            accepted = aggregation.accepted,
            skipped = aggregation.skipped.len(),
            votes = aggregation.total_votes(),
            "Aggregated answers"
        );

        aggregation
    }

    fn resolve(&self, answer: &AnswerRecord) -> Result<Vec<Contribution>, AssessmentError> {
        let options = answer.option_list()?;
        let index = answer.option_index(&options)?;
        let spec = WeightSpec::from_value(&answer.weight_value())?;

        let contributions = spec.contributions(SelectedOption {
            framework: self.framework,
            category: &answer.category,
            answer_text: &answer.answer_text,
            index,
            option_count: options.len(),
        })?;

        // Count-based frameworks treat a non-positive delta as an abstention.
        let contributions: Vec<Contribution> = match self.framework {
            Framework::BigFive => {
                if let Some(c) = contributions.iter().find(|c| !self.rules.on_scale(c.delta)) {
                    return Err(AssessmentError::malformed(format!(
                        "{} value {} is outside the {}..={} scale",
                        c.dimension, c.delta, self.rules.likert_min, self.rules.likert_max
                    )));
                }
                contributions
            }
            _ => contributions.into_iter().filter(|c| c.delta > 0.0).collect(),
        };

        if !answer.is_reverse {
            return Ok(contributions);
        }

        contributions
            .into_iter()
            .map(|c| self.reverse(c))
            .collect()
    }

    /// Paired poles flip to their opposite; Big Five values mirror on the
    /// Likert scale; Enneagram types cannot be reversed.
    fn reverse(&self, c: Contribution) -> Result<Contribution, AssessmentError> {
        match c.dimension {
            Dimension::BigFive(_) => Ok(Contribution {
                dimension: c.dimension,
                delta: self.rules.mirror(c.delta),
            }),
            other => other
                .opposite()
                .map(|dimension| Contribution {
                    dimension,
                    delta: c.delta,
                })
                .ok_or_else(|| {
                    AssessmentError::malformed(format!(
                        "reverse-coded question on {} has no opposite pole",
                        other
                    ))
                }),
        }
    }
}

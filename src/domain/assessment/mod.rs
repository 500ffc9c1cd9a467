//! Assessment Module - Pure scoring pipeline for the four frameworks.
//!
//! Answers flow through four stateless stages:
//!
//! # Components
//!
//! - `AnswerAggregator` - Resolves each answer's weight encoding into
//!   per-dimension totals and counts, skipping answers that cannot be parsed
//! - `TraitScorer` - Normalizes totals into pole preferences (MBTI, DISC),
//!   Likert averages (Big Five) or vote shares (Enneagram)
//! - `ClassificationResolver` - Applies tie-breaks and decision rules, then
//!   attaches catalog descriptions
//! - `AssessmentEngine` - Façade running the pipeline and the composite
//!   synthesis with shared rules and catalog
//!
//! # Design Philosophy
//!
//! Nothing here performs I/O. Answers are fetched by the caller and passed in,
//! so identical input always yields an identical classification.

mod aggregator;
mod answer;
mod classification;
mod dimension;
mod engine;
mod errors;
mod framework;
mod resolver;
mod rules;
mod scorer;
mod weight;

// Re-export all public types
pub use aggregator::{Aggregation, AnswerAggregator, DimensionAccumulator, SkippedAnswer};
pub use answer::AnswerRecord;
pub use classification::{
    BigFiveArchetype, BigFiveDetail, Classification, DiscDetail, EnneagramDetail, FrameworkDetail,
    HealthLevel, MbtiDetail, PreferenceView, TraitBand, TraitDescriptor, Tritype,
};
pub use dimension::{
    BigFiveTrait, Dimension, DiscStyle, EnneagramType, MbtiPole, Pole, Triad,
};
pub use engine::{AssessmentEngine, Evaluation};
pub use errors::AssessmentError;
pub use framework::Framework;
pub use resolver::ClassificationResolver;
pub use rules::{ScoringRules, SynthesisRules};
pub use scorer::{PolePreference, PoleScores, TraitAverages, TraitScorer, TraitScores, TypeShares};
pub use weight::{Contribution, SelectedOption, WeightSpec};

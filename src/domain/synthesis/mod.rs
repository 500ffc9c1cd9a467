//! Synthesis Module - Cross-framework composite reports.
//!
//! # Components
//!
//! - `CompositeSynthesizer` - Merges completed classifications
//! - `CompositeReport` - Overall narrative, careers, development buckets and
//!   integrated insights
//! - `insights` - Ordered signal/phrase rule chains for leadership,
//!   communication and work environment

pub mod insights;
mod report;
mod synthesizer;

pub use insights::Signal;
pub use report::{
    Compatibility, CompositeReport, CompositeSummary, DevelopmentPriorities, Insight,
    IntegratedInsights,
};
pub use synthesizer::CompositeSynthesizer;

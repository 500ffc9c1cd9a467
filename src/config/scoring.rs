//! Scoring configuration
//!
//! Thresholds for the assessment engine. Defaults reproduce the standard
//! scoring behavior.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::assessment::{ScoringRules, SynthesisRules};

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_trait_high")]
    pub trait_high_threshold: f64,

    #[serde(default = "default_trait_low")]
    pub trait_low_threshold: f64,

    #[serde(default = "default_likert_min")]
    pub likert_min: f64,

    #[serde(default = "default_likert_max")]
    pub likert_max: f64,

    /// Percentage a wing must strictly exceed.
    #[serde(default)]
    pub wing_min_share: f64,

    #[serde(default = "default_health_integrated")]
    pub health_integrated: f64,

    #[serde(default = "default_health_average")]
    pub health_average: f64,

    #[serde(default = "default_max_careers")]
    pub max_career_recommendations: usize,

    #[serde(default = "default_bucket_size")]
    pub priority_bucket_size: usize,
}

impl ScoringConfig {
    pub fn scoring_rules(&self) -> ScoringRules {
        ScoringRules {
            trait_high_threshold: self.trait_high_threshold,
            trait_low_threshold: self.trait_low_threshold,
            likert_min: self.likert_min,
            likert_max: self.likert_max,
            wing_min_share: self.wing_min_share,
            health_integrated: self.health_integrated,
            health_average: self.health_average,
        }
    }

    pub fn synthesis_rules(&self) -> SynthesisRules {
        SynthesisRules {
            max_career_recommendations: self.max_career_recommendations,
            priority_bucket_size: self.priority_bucket_size,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.trait_low_threshold >= self.trait_high_threshold {
            return Err(ValidationError::InvalidTraitThresholds);
        }
        if self.likert_min >= self.likert_max {
            return Err(ValidationError::InvalidLikertScale);
        }
        if self.health_average > self.health_integrated {
            return Err(ValidationError::InvalidHealthThresholds);
        }
        if !(0.0..100.0).contains(&self.wing_min_share) {
            return Err(ValidationError::InvalidWingShare);
        }
        if self.max_career_recommendations == 0 || self.priority_bucket_size == 0 {
            return Err(ValidationError::InvalidSynthesisLimits);
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            trait_high_threshold: default_trait_high(),
            trait_low_threshold: default_trait_low(),
            likert_min: default_likert_min(),
            likert_max: default_likert_max(),
            wing_min_share: 0.0,
            health_integrated: default_health_integrated(),
            health_average: default_health_average(),
            max_career_recommendations: default_max_careers(),
            priority_bucket_size: default_bucket_size(),
        }
    }
}

fn default_trait_high() -> f64 {
    3.5
}

fn default_trait_low() -> f64 {
    2.5
}

fn default_likert_min() -> f64 {
    1.0
}

fn default_likert_max() -> f64 {
    5.0
}

fn default_health_integrated() -> f64 {
    4.5
}

fn default_health_average() -> f64 {
    3.5
}

fn default_max_careers() -> usize {
    8
}

fn default_bucket_size() -> usize {
    3
}

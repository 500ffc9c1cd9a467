//! Tunable scoring thresholds.

use serde::{Deserialize, Serialize};

/// Thresholds and scale bounds used by scoring and resolution.
///
/// Defaults are the heuristics used by the questionnaire banks' own
/// scoring, not values taken from any published interpretation guide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Big Five average strictly above this is a "high" trait.
    pub trait_high_threshold: f64,
    /// Big Five average strictly below this is a "low" trait.
    pub trait_low_threshold: f64,
    /// Lowest Likert scale point, used to mirror reverse-coded items.
    pub likert_min: f64,
    /// Highest Likert scale point.
    pub likert_max: f64,
    /// A wing is only reported when its share strictly exceeds this percentage.
    pub wing_min_share: f64,
    /// Mean primary-type weight at or above which health is "integrated".
    pub health_integrated: f64,
    /// Mean primary-type weight at or above which health is "average".
    pub health_average: f64,
}

impl ScoringRules {
    /// Mirrors a value on the Likert scale (5 becomes 1 on a 1-5 scale).
    pub fn mirror(&self, value: f64) -> f64 {
        self.likert_min + self.likert_max - value
    }

    /// True when `value` lies on the Likert scale, bounds included.
    pub fn on_scale(&self, value: f64) -> bool {
        (self.likert_min..=self.likert_max).contains(&value)
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            trait_high_threshold: 3.5,
            trait_low_threshold: 2.5,
            likert_min: 1.0,
            likert_max: 5.0,
            wing_min_share: 0.0,
            health_integrated: 4.5,
            health_average: 3.5,
        }
    }
}

/// Limits applied when merging frameworks into a composite report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisRules {
    pub max_career_recommendations: usize,
    pub priority_bucket_size: usize,
}

impl Default for SynthesisRules {
    fn default() -> Self {
        Self {
            max_career_recommendations: 8,
            priority_bucket_size: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_flips_five_point_scale() {
        let rules = ScoringRules::default();
        assert_eq!(rules.mirror(5.0), 1.0);
        assert_eq!(rules.mirror(3.0), 3.0);
        assert_eq!(rules.mirror(2.0), 4.0);
    }

    #[test]
    fn scale_bounds_are_inclusive() {
        let rules = ScoringRules::default();
        assert!(rules.on_scale(1.0));
        assert!(rules.on_scale(5.0));
        assert!(!rules.on_scale(0.0));
        assert!(!rules.on_scale(5.5));
    }
}

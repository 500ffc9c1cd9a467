//! CompositeReport and its narrative sections.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{Classification, Framework};

/// Cross-framework synthesis for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeReport {
    /// Frameworks that produced a classification, in presentation order.
    pub completed_tests: Vec<Framework>,
    pub overall_analysis: String,
    pub career_recommendations: Vec<String>,
    pub development_priorities: DevelopmentPriorities,
    pub integrated_insights: IntegratedInsights,
    pub summary: CompositeSummary,
    pub classifications: Vec<Classification>,
}

impl CompositeReport {
    pub fn classification(&self, framework: Framework) -> Option<&Classification> {
        self.classifications.iter().find(|c| c.framework == framework)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DevelopmentPriorities {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub long_term: Vec<String>,
}

/// Headline style plus every phrase that matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub primary_style: String,
    pub traits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Compatibility {
    pub mbti_type: Option<String>,
    pub compatible_types: Vec<String>,
    pub disc_style: Option<String>,
    pub communication_preference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegratedInsights {
    pub leadership_style: Insight,
    pub communication_preferences: Insight,
    pub work_environment_fit: Insight,
    pub compatibility: Compatibility,
}

/// One headline code per framework.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompositeSummary {
    pub mbti_type: Option<String>,
    pub disc_primary: Option<String>,
    pub big5_type: Option<String>,
    pub enneagram_type: Option<String>,
}

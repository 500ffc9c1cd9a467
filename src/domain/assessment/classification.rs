//! Classification - the discrete, presentable result of one framework.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{BigFiveTrait, DiscStyle, EnneagramType, Framework, MbtiPole, Pole, PolePreference};
use crate::domain::foundation::Percentage;

/// Result of resolving one framework's scores.
///
/// `code` is the framework's headline label: "ENTJ", "D", the Big Five
/// archetype key, or "8w7".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub framework: Framework,
    pub code: String,
    pub title: String,
    pub description: String,
    pub dimension_scores: BTreeMap<String, f64>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub career_suggestions: Vec<String>,
    pub development_suggestions: Vec<String>,
    pub communication_style: Option<String>,
    pub work_style: Option<String>,
    pub detail: FrameworkDetail,
}

impl Classification {
    pub fn mbti(&self) -> Option<&MbtiDetail> {
        match &self.detail {
            FrameworkDetail::Mbti(d) => Some(d),
            _ => None,
        }
    }

    pub fn disc(&self) -> Option<&DiscDetail> {
        match &self.detail {
            FrameworkDetail::Disc(d) => Some(d),
            _ => None,
        }
    }

    pub fn big_five(&self) -> Option<&BigFiveDetail> {
        match &self.detail {
            FrameworkDetail::BigFive(d) => Some(d),
            _ => None,
        }
    }

    pub fn enneagram(&self) -> Option<&EnneagramDetail> {
        match &self.detail {
            FrameworkDetail::Enneagram(d) => Some(d),
            _ => None,
        }
    }
}

/// Framework-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrameworkDetail {
    Mbti(MbtiDetail),
    Disc(DiscDetail),
    BigFive(BigFiveDetail),
    Enneagram(EnneagramDetail),
}

/// One pole pair as shown in reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceView {
    pub first: String,
    pub second: String,
    pub first_percentage: Percentage,
    pub second_percentage: Percentage,
    pub selected: String,
}

impl<P: Pole> From<&PolePreference<P>> for PreferenceView {
    fn from(pref: &PolePreference<P>) -> Self {
        Self {
            first: pref.first.code().to_string(),
            second: pref.second.code().to_string(),
            first_percentage: pref.first_percentage,
            second_percentage: pref.second_percentage,
            selected: pref.leading().code().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MbtiDetail {
    /// Selected letter per pair: energy, perception, judgement, lifestyle.
    pub letters: [MbtiPole; 4],
    pub preferences: Vec<PreferenceView>,
    pub combinations: Vec<String>,
    pub compatible_types: Vec<String>,
}

impl MbtiDetail {
    pub fn has(&self, pole: MbtiPole) -> bool {
        self.letters.contains(&pole)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscDetail {
    pub primary: DiscStyle,
    pub secondary: Option<DiscStyle>,
    pub counts: BTreeMap<String, u32>,
    pub preferences: Vec<PreferenceView>,
    pub combination: Option<String>,
}

/// Which side of the thresholds a Big Five average falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitBand {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitDescriptor {
    pub trait_name: BigFiveTrait,
    pub average: f64,
    pub band: TraitBand,
    pub descriptor: Option<String>,
}

/// Coarse Big Five combination label, in rule precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BigFiveArchetype {
    SocialLeader,
    CreativeLeader,
    ReliableExecutor,
    ReliableCollaborator,
    Balanced,
}

impl BigFiveArchetype {
    pub fn key(&self) -> &'static str {
        match self {
            BigFiveArchetype::SocialLeader => "social_leader",
            BigFiveArchetype::CreativeLeader => "creative_leader",
            BigFiveArchetype::ReliableExecutor => "reliable_executor",
            BigFiveArchetype::ReliableCollaborator => "reliable_collaborator",
            BigFiveArchetype::Balanced => "balanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigFiveDetail {
    pub descriptors: Vec<TraitDescriptor>,
    pub archetype: BigFiveArchetype,
    pub social_style: Option<String>,
    pub summary: String,
}

impl BigFiveDetail {
    pub fn band(&self, t: BigFiveTrait) -> TraitBand {
        self.descriptors
            .iter()
            .find(|d| d.trait_name == t)
            .map(|d| d.band)
            .unwrap_or(TraitBand::Moderate)
    }
}

/// One dominant type per center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tritype {
    pub body: EnneagramType,
    pub heart: EnneagramType,
    pub head: EnneagramType,
}

impl Tritype {
    pub fn types(&self) -> [EnneagramType; 3] {
        [self.body, self.heart, self.head]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthLevel {
    Integrated,
    Average,
    Developing,
}

impl HealthLevel {
    pub fn key(&self) -> &'static str {
        match self {
            HealthLevel::Integrated => "integrated",
            HealthLevel::Average => "average",
            HealthLevel::Developing => "developing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnneagramDetail {
    pub primary_type: EnneagramType,
    pub wing: Option<EnneagramType>,
    pub tritype: Tritype,
    pub health_level: HealthLevel,
    pub health_description: String,
    pub core_fear: String,
    pub core_desire: String,
    pub growth_direction: String,
    pub stress_direction: String,
}

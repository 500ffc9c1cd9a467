//! Table shapes of the lookup catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Descriptive profile shared by every keyed classification table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub careers: Vec<String>,
    #[serde(default)]
    pub development: Vec<String>,
    #[serde(default)]
    pub communication_style: Option<String>,
    #[serde(default)]
    pub work_style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MbtiEntry {
    #[serde(flatten)]
    pub profile: Profile,
    /// Types that usually pair well with this one.
    #[serde(default)]
    pub compatible: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MbtiTable {
    pub types: BTreeMap<String, MbtiEntry>,
    /// Temperament pairs keyed "ES", "IN", "TJ", "FP" and so on.
    #[serde(default)]
    pub combinations: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscTable {
    pub styles: BTreeMap<String, Profile>,
    /// Dual-style labels keyed in D, I, S, C order ("DI", "SC").
    #[serde(default)]
    pub combinations: BTreeMap<String, String>,
}

/// What a trait contributes when its average falls into one band.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TraitBandEntry {
    pub descriptor: String,
    #[serde(default)]
    pub strength: Option<String>,
    #[serde(default)]
    pub weakness: Option<String>,
    #[serde(default)]
    pub development: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitEntry {
    pub name: String,
    pub high: TraitBandEntry,
    pub low: TraitBandEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeEntry {
    pub label: String,
    #[serde(default)]
    pub description: String,
}

/// Fallback lists for a profile without any high or low trait.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BalancedProfile {
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub development: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigFiveTable {
    /// Keyed by trait code: O, C, E, A, N.
    pub traits: BTreeMap<String, TraitEntry>,
    pub archetypes: BTreeMap<String, ArchetypeEntry>,
    #[serde(default)]
    pub career_groups: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub work_styles: BTreeMap<String, String>,
    #[serde(default)]
    pub social_styles: BTreeMap<String, String>,
    pub balanced: BalancedProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnneagramEntry {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub core_fear: String,
    #[serde(default)]
    pub core_desire: String,
    #[serde(default)]
    pub growth_direction: String,
    #[serde(default)]
    pub stress_direction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnneagramTable {
    /// Keyed "1" to "9".
    pub types: BTreeMap<String, EnneagramEntry>,
    pub health_levels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightFallbacks {
    pub leadership: String,
    pub communication: String,
    pub work_environment: String,
}

/// Phrases used by the composite insight rule chains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeTable {
    #[serde(default)]
    pub leadership: BTreeMap<String, String>,
    #[serde(default)]
    pub communication: BTreeMap<String, String>,
    #[serde(default)]
    pub work_environment: BTreeMap<String, String>,
    pub fallbacks: InsightFallbacks,
    #[serde(default)]
    pub long_term_goals: Vec<String>,
}

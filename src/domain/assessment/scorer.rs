//! TraitScorer - Normalizes accumulated totals into framework scores.
//!
//! Paired-pole frameworks (MBTI, DISC) and the Enneagram are count based:
//! every selected option is one vote. Big Five is a continuous average of
//! the selected scale values.
//!
//! Division by zero never raises. The neutral defaults are 50/50 for a pole
//! pair, an even split for DISC intensities and Enneagram shares, and 0 for
//! an unanswered Big Five trait.

use std::collections::BTreeMap;

use super::{
    Aggregation, BigFiveTrait, DiscStyle, Dimension, EnneagramType, Framework, MbtiPole, Pole,
};
use crate::domain::foundation::Percentage;

/// Relative preference between two opposing poles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolePreference<P> {
    pub first: P,
    pub second: P,
    pub first_count: u32,
    pub second_count: u32,
    pub first_percentage: Percentage,
    pub second_percentage: Percentage,
}

impl<P: Pole> PolePreference<P> {
    pub fn from_counts(first: P, second: P, first_count: u32, second_count: u32) -> Self {
        let total = first_count + second_count;
        Self {
            first,
            second,
            first_count,
            second_count,
            first_percentage: Percentage::of(first_count, total).unwrap_or(Percentage::HALF),
            second_percentage: Percentage::of(second_count, total).unwrap_or(Percentage::HALF),
        }
    }

    /// The selected pole. An exact 50/50 split selects the first-listed pole.
    pub fn leading(&self) -> P {
        if self.first_percentage >= Percentage::HALF {
            self.first
        } else {
            self.second
        }
    }

    /// Percentage of the selected pole.
    pub fn leading_percentage(&self) -> Percentage {
        if self.leading() == self.first {
            self.first_percentage
        } else {
            self.second_percentage
        }
    }
}

/// Count-based scores for a paired-pole framework.
#[derive(Debug, Clone, PartialEq)]
pub struct PoleScores<P: Pole> {
    pub counts: BTreeMap<P, u32>,
    pub preferences: Vec<PolePreference<P>>,
    /// Share of all votes received by each pole.
    pub intensities: BTreeMap<P, Percentage>,
    pub total_votes: u32,
}

impl<P: Pole> PoleScores<P> {
    pub fn from_counts(count_of: impl Fn(P) -> u32) -> Self {
        let counts: BTreeMap<P, u32> = P::all().iter().map(|&p| (p, count_of(p))).collect();
        let total_votes = counts.values().sum();

        let preferences = P::pairs()
            .iter()
            .map(|&(a, b)| PolePreference::from_counts(a, b, count_of(a), count_of(b)))
            .collect();

        let even = Percentage::new(100.0 / P::all().len() as f64);
        let intensities = counts
            .iter()
            .map(|(&p, &c)| (p, Percentage::of(c, total_votes).unwrap_or(even)))
            .collect();

        Self {
            counts,
            preferences,
            intensities,
            total_votes,
        }
    }

    pub fn count(&self, pole: P) -> u32 {
        self.counts.get(&pole).copied().unwrap_or(0)
    }

    pub fn intensity(&self, pole: P) -> Percentage {
        self.intensities.get(&pole).copied().unwrap_or_default()
    }

    /// Preference whose first or second pole is `pole`.
    pub fn preference(&self, pole: P) -> Option<&PolePreference<P>> {
        self.preferences
            .iter()
            .find(|pref| pref.first == pole || pref.second == pole)
    }
}

/// Big Five trait averages on the Likert scale.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitAverages {
    pub averages: BTreeMap<BigFiveTrait, f64>,
    pub counts: BTreeMap<BigFiveTrait, u32>,
}

impl TraitAverages {
    pub fn average(&self, t: BigFiveTrait) -> f64 {
        self.averages.get(&t).copied().unwrap_or(0.0)
    }

    pub fn count(&self, t: BigFiveTrait) -> u32 {
        self.counts.get(&t).copied().unwrap_or(0)
    }

    pub fn answered_traits(&self) -> usize {
        self.counts.values().filter(|&&c| c > 0).count()
    }
}

/// Enneagram vote shares across the nine types.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeShares {
    pub counts: BTreeMap<EnneagramType, u32>,
    pub shares: BTreeMap<EnneagramType, Percentage>,
    /// Mean weight of the votes each type received.
    pub mean_weights: BTreeMap<EnneagramType, f64>,
    pub total_votes: u32,
}

impl TypeShares {
    pub fn count(&self, t: EnneagramType) -> u32 {
        self.counts.get(&t).copied().unwrap_or(0)
    }

    pub fn share(&self, t: EnneagramType) -> Percentage {
        self.shares.get(&t).copied().unwrap_or_default()
    }

    pub fn mean_weight(&self, t: EnneagramType) -> f64 {
        self.mean_weights.get(&t).copied().unwrap_or(0.0)
    }
}

/// Normalized scores, one shape per framework.
#[derive(Debug, Clone, PartialEq)]
pub enum TraitScores {
    Mbti(PoleScores<MbtiPole>),
    Disc(PoleScores<DiscStyle>),
    BigFive(TraitAverages),
    Enneagram(TypeShares),
}

impl TraitScores {
    pub fn framework(&self) -> Framework {
        match self {
            TraitScores::Mbti(_) => Framework::Mbti,
            TraitScores::Disc(_) => Framework::Disc,
            TraitScores::BigFive(_) => Framework::BigFive,
            TraitScores::Enneagram(_) => Framework::Enneagram,
        }
    }

    /// False when nothing was scored, so no classification may be produced.
    pub fn has_signal(&self) -> bool {
        match self {
            TraitScores::Mbti(s) => s.total_votes > 0,
            TraitScores::Disc(s) => s.total_votes > 0,
            TraitScores::BigFive(s) => s.answered_traits() > 0,
            TraitScores::Enneagram(s) => s.total_votes > 0,
        }
    }
}

/// Stateless scorer over an aggregation.
pub struct TraitScorer;

impl TraitScorer {
    pub fn score(aggregation: &Aggregation) -> TraitScores {
        match aggregation.framework {
            Framework::Mbti => TraitScores::Mbti(PoleScores::from_counts(|p| {
                aggregation.count(Dimension::Mbti(p))
            })),
            Framework::Disc => TraitScores::Disc(PoleScores::from_counts(|s| {
                aggregation.count(Dimension::Disc(s))
            })),
            Framework::BigFive => TraitScores::BigFive(Self::big_five(aggregation)),
            Framework::Enneagram => TraitScores::Enneagram(Self::enneagram(aggregation)),
        }
    }

    fn big_five(aggregation: &Aggregation) -> TraitAverages {
        let mut averages = BTreeMap::new();
        let mut counts = BTreeMap::new();
        for t in BigFiveTrait::ALL {
            let acc = aggregation.get(Dimension::BigFive(t));
            averages.insert(t, acc.mean().unwrap_or(0.0));
            counts.insert(t, acc.count);
        }
        TraitAverages { averages, counts }
    }

    fn enneagram(aggregation: &Aggregation) -> TypeShares {
        let even = Percentage::new(100.0 / EnneagramType::ALL.len() as f64);
        let counts: BTreeMap<EnneagramType, u32> = EnneagramType::ALL
            .iter()
            .map(|&t| (t, aggregation.count(Dimension::Enneagram(t))))
            .collect();
        let total_votes: u32 = counts.values().sum();

        let shares = counts
            .iter()
            .map(|(&t, &c)| (t, Percentage::of(c, total_votes).unwrap_or(even)))
            .collect();
        let mean_weights = EnneagramType::ALL
            .iter()
            .map(|&t| {
                let mean = aggregation.get(Dimension::Enneagram(t)).mean();
                (t, mean.unwrap_or(0.0))
            })
            .collect();

        TypeShares {
            counts,
            shares,
            mean_weights,
            total_votes,
        }
    }
}

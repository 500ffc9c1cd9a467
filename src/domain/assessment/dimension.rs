//! Framework dimensions: the poles, traits and types answers vote for.
//!
//! Question banks label categories inconsistently ("E", "E-I", "Extraversion",
//! "外向性", "類型3"), so every dimension enum knows how to resolve the labels
//! it accepts. Anything unrecognised resolves to `None` and the answer that
//! carried it is treated as malformed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Framework;

/// A pole that participates in a count-based pole pair model.
pub trait Pole: Copy + Ord + fmt::Debug + Send + Sync + 'static {
    /// Every pole in canonical order.
    fn all() -> &'static [Self];

    /// Opposing pole pairs, first-listed pole first.
    fn pairs() -> &'static [(Self, Self)];

    /// Short code ("E", "D").
    fn code(self) -> &'static str;

    /// Opposite pole used for reverse-coded questions.
    fn opposite(self) -> Self;
}

// ════════════════════════════════════════════════════════════════════════════════
// MBTI
// ════════════════════════════════════════════════════════════════════════════════

/// One of the eight MBTI preference letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MbtiPole {
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "I")]
    Introversion,
    #[serde(rename = "S")]
    Sensing,
    #[serde(rename = "N")]
    Intuition,
    #[serde(rename = "T")]
    Thinking,
    #[serde(rename = "F")]
    Feeling,
    #[serde(rename = "J")]
    Judging,
    #[serde(rename = "P")]
    Perceiving,
}

impl MbtiPole {
    pub fn from_label(label: &str) -> Option<Self> {
        use MbtiPole::*;
        let label = first_of_pair(label.trim());
        let pole = match label.to_ascii_uppercase().as_str() {
            "E" | "EXTRAVERSION" | "EXTROVERSION" | "EXTRAVERTED" => Extraversion,
            "I" | "INTROVERSION" | "INTROVERTED" => Introversion,
            "S" | "SENSING" | "SENSATION" => Sensing,
            "N" | "INTUITION" | "INTUITIVE" => Intuition,
            "T" | "THINKING" => Thinking,
            "F" | "FEELING" => Feeling,
            "J" | "JUDGING" | "JUDGMENT" | "JUDGEMENT" => Judging,
            "P" | "PERCEIVING" | "PERCEPTION" => Perceiving,
            _ => match label {
                "外向" => Extraversion,
                "內向" | "内向" => Introversion,
                "實感" | "感覺" | "感觉" => Sensing,
                "直覺" | "直觉" => Intuition,
                "思考" => Thinking,
                "情感" => Feeling,
                "判斷" | "判断" => Judging,
                "知覺" | "感知" | "知觉" => Perceiving,
                _ => return None,
            },
        };
        Some(pole)
    }
}

impl Pole for MbtiPole {
    fn all() -> &'static [Self] {
        use MbtiPole::*;
        &[
            Extraversion,
            Introversion,
            Sensing,
            Intuition,
            Thinking,
            Feeling,
            Judging,
            Perceiving,
        ]
    }

    fn pairs() -> &'static [(Self, Self)] {
        use MbtiPole::*;
        &[
            (Extraversion, Introversion),
            (Sensing, Intuition),
            (Thinking, Feeling),
            (Judging, Perceiving),
        ]
    }

    fn code(self) -> &'static str {
        match self {
            MbtiPole::Extraversion => "E",
            MbtiPole::Introversion => "I",
            MbtiPole::Sensing => "S",
            MbtiPole::Intuition => "N",
            MbtiPole::Thinking => "T",
            MbtiPole::Feeling => "F",
            MbtiPole::Judging => "J",
            MbtiPole::Perceiving => "P",
        }
    }

    fn opposite(self) -> Self {
        use MbtiPole::*;
        match self {
            Extraversion => Introversion,
            Introversion => Extraversion,
            Sensing => Intuition,
            Intuition => Sensing,
            Thinking => Feeling,
            Feeling => Thinking,
            Judging => Perceiving,
            Perceiving => Judging,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// DISC
// ════════════════════════════════════════════════════════════════════════════════

/// One of the four DISC behavioural styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiscStyle {
    #[serde(rename = "D")]
    Dominance,
    #[serde(rename = "I")]
    Influence,
    #[serde(rename = "S")]
    Steadiness,
    #[serde(rename = "C")]
    Conscientiousness,
}

impl DiscStyle {
    pub fn from_label(label: &str) -> Option<Self> {
        use DiscStyle::*;
        let label = first_of_pair(label.trim());
        let style = match label.to_ascii_uppercase().as_str() {
            "D" | "DOMINANCE" | "DOMINANT" => Dominance,
            "I" | "INFLUENCE" | "INFLUENTIAL" => Influence,
            "S" | "STEADINESS" | "STEADY" => Steadiness,
            "C" | "CONSCIENTIOUSNESS" | "COMPLIANCE" | "CONSCIENTIOUS" => Conscientiousness,
            _ => match label {
                "支配" | "支配型" => Dominance,
                "影響" | "影響型" | "影响" => Influence,
                "穩健" | "穩定" | "穩健型" | "稳定" => Steadiness,
                "謹慎" | "服從" | "謹慎型" | "谨慎" => Conscientiousness,
                _ => return None,
            },
        };
        Some(style)
    }
}

impl Pole for DiscStyle {
    fn all() -> &'static [Self] {
        use DiscStyle::*;
        &[Dominance, Influence, Steadiness, Conscientiousness]
    }

    /// Diagonal opposites on the DISC circle.
    fn pairs() -> &'static [(Self, Self)] {
        use DiscStyle::*;
        &[(Dominance, Steadiness), (Influence, Conscientiousness)]
    }

    fn code(self) -> &'static str {
        match self {
            DiscStyle::Dominance => "D",
            DiscStyle::Influence => "I",
            DiscStyle::Steadiness => "S",
            DiscStyle::Conscientiousness => "C",
        }
    }

    fn opposite(self) -> Self {
        use DiscStyle::*;
        match self {
            Dominance => Steadiness,
            Steadiness => Dominance,
            Influence => Conscientiousness,
            Conscientiousness => Influence,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Big Five
// ════════════════════════════════════════════════════════════════════════════════

/// One of the five continuous Big Five traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BigFiveTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl BigFiveTrait {
    pub const ALL: [BigFiveTrait; 5] = [
        BigFiveTrait::Openness,
        BigFiveTrait::Conscientiousness,
        BigFiveTrait::Extraversion,
        BigFiveTrait::Agreeableness,
        BigFiveTrait::Neuroticism,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        use BigFiveTrait::*;
        let label = label.trim();
        let t = match label.to_ascii_uppercase().as_str() {
            "O" | "OPENNESS" => Openness,
            "C" | "CONSCIENTIOUSNESS" => Conscientiousness,
            "E" | "EXTRAVERSION" | "EXTROVERSION" => Extraversion,
            "A" | "AGREEABLENESS" => Agreeableness,
            "N" | "NEUROTICISM" => Neuroticism,
            _ => match label {
                "開放性" | "开放性" => Openness,
                "盡責性" | "嚴謹性" | "尽责性" | "责任心" => Conscientiousness,
                "外向性" => Extraversion,
                "友善性" | "親和性" | "宜人性" | "亲和性" => Agreeableness,
                "神經質" | "神经质" | "情緒性" => Neuroticism,
                _ => return None,
            },
        };
        Some(t)
    }

    pub fn code(self) -> &'static str {
        match self {
            BigFiveTrait::Openness => "O",
            BigFiveTrait::Conscientiousness => "C",
            BigFiveTrait::Extraversion => "E",
            BigFiveTrait::Agreeableness => "A",
            BigFiveTrait::Neuroticism => "N",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BigFiveTrait::Openness => "openness",
            BigFiveTrait::Conscientiousness => "conscientiousness",
            BigFiveTrait::Extraversion => "extraversion",
            BigFiveTrait::Agreeableness => "agreeableness",
            BigFiveTrait::Neuroticism => "neuroticism",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Enneagram
// ════════════════════════════════════════════════════════════════════════════════

/// The three Enneagram centers of intelligence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Triad {
    /// Gut center: types 8, 9, 1.
    Body,
    /// Feeling center: types 2, 3, 4.
    Heart,
    /// Thinking center: types 5, 6, 7.
    Head,
}

impl Triad {
    pub const ALL: [Triad; 3] = [Triad::Body, Triad::Heart, Triad::Head];

    /// Member types, in ascending number order.
    pub fn members(self) -> [EnneagramType; 3] {
        let [a, b, c] = match self {
            Triad::Body => [1, 8, 9],
            Triad::Heart => [2, 3, 4],
            Triad::Head => [5, 6, 7],
        };
        [EnneagramType(a), EnneagramType(b), EnneagramType(c)]
    }
}

/// An Enneagram type number, always within 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct EnneagramType(u8);

impl EnneagramType {
    pub const ALL: [EnneagramType; 9] = [
        EnneagramType(1),
        EnneagramType(2),
        EnneagramType(3),
        EnneagramType(4),
        EnneagramType(5),
        EnneagramType(6),
        EnneagramType(7),
        EnneagramType(8),
        EnneagramType(9),
    ];

    pub fn new(number: u8) -> Option<Self> {
        (1..=9).contains(&number).then_some(Self(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn code(self) -> &'static str {
        const CODES: [&str; 9] = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];
        CODES[usize::from(self.0 - 1)]
    }

    /// The numerically adjacent types on the circle, lower neighbour first.
    /// Type 1 neighbours 9 and 2; type 9 neighbours 8 and 1.
    pub fn neighbours(self) -> (Self, Self) {
        let lower = if self.0 == 1 { 9 } else { self.0 - 1 };
        let upper = if self.0 == 9 { 1 } else { self.0 + 1 };
        (Self(lower), Self(upper))
    }

    pub fn triad(self) -> Triad {
        match self.0 {
            8 | 9 | 1 => Triad::Body,
            2..=4 => Triad::Heart,
            _ => Triad::Head,
        }
    }

    /// Accepts "3", "類型3", "type3", "Type 3", "type_3".
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        let digits = trimmed
            .strip_prefix("類型")
            .or_else(|| trimmed.strip_prefix("类型"))
            .or_else(|| {
                trimmed
                    .get(..4)
                    .filter(|prefix| prefix.eq_ignore_ascii_case("type"))
                    .map(|_| &trimmed[4..])
            })
            .unwrap_or(trimmed)
            .trim_start_matches(&[' ', '_', '-'][..]);
        digits.parse::<u8>().ok().and_then(Self::new)
    }
}

impl TryFrom<u8> for EnneagramType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("enneagram type must be 1-9, got {}", value))
    }
}

impl From<EnneagramType> for u8 {
    fn from(value: EnneagramType) -> Self {
        value.0
    }
}

impl fmt::Display for EnneagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Dimension
// ════════════════════════════════════════════════════════════════════════════════

/// Any dimension an answer can contribute to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Mbti(MbtiPole),
    Disc(DiscStyle),
    BigFive(BigFiveTrait),
    Enneagram(EnneagramType),
}

impl Dimension {
    /// Resolves a category or weight-key label within a framework.
    pub fn parse(framework: Framework, label: &str) -> Option<Self> {
        match framework {
            Framework::Mbti => MbtiPole::from_label(label).map(Dimension::Mbti),
            Framework::Disc => DiscStyle::from_label(label).map(Dimension::Disc),
            Framework::BigFive => BigFiveTrait::from_label(label).map(Dimension::BigFive),
            Framework::Enneagram => EnneagramType::from_label(label).map(Dimension::Enneagram),
        }
    }

    pub fn framework(&self) -> Framework {
        match self {
            Dimension::Mbti(_) => Framework::Mbti,
            Dimension::Disc(_) => Framework::Disc,
            Dimension::BigFive(_) => Framework::BigFive,
            Dimension::Enneagram(_) => Framework::Enneagram,
        }
    }

    /// Key used in `dimension_scores` maps.
    pub fn code(&self) -> &'static str {
        match self {
            Dimension::Mbti(p) => p.code(),
            Dimension::Disc(s) => s.code(),
            Dimension::BigFive(t) => t.code(),
            Dimension::Enneagram(t) => t.code(),
        }
    }

    /// Opposite pole for paired frameworks; `None` for Big Five traits and
    /// Enneagram types.
    pub fn opposite(&self) -> Option<Self> {
        match self {
            Dimension::Mbti(p) => Some(Dimension::Mbti(p.opposite())),
            Dimension::Disc(s) => Some(Dimension::Disc(s.opposite())),
            Dimension::BigFive(_) | Dimension::Enneagram(_) => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.framework(), self.code())
    }
}

/// "E-I", "E/I" and "EI" style pair labels resolve to their first pole.
fn first_of_pair(label: &str) -> &str {
    if let Some((first, _)) = label.split_once(&['-', '/'][..]) {
        return first.trim();
    }
    let mut chars = label.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
            &label[..a.len_utf8()]
        }
        _ => label,
    }
}

//! Question weight encodings.
//!
//! Question banks encode weights in several shapes. Each shape resolves the
//! selected option into a list of `(dimension, delta)` contributions:
//!
//! | Shape | Example | Contribution |
//! |-------|---------|--------------|
//! | by option | `{"Yes": {"E": 1}}` | entries for the selected text with delta > 0 |
//! | positional | `[5, 4, 3, 2, 1]` | delta at the option index, to the category |
//! | per option | `[{"D": 1, "I": 0}, ...]` | entries at the option index with delta > 0 |
//! | scale | `{"外向性": [5, 4, 3, 2, 1]}` | delta at the option index, per key |
//! | polar | `{"E": 1, "I": -1}` | first option to the positive key, second to the negative |
//! | affirmation | `{"類型1": 1}` | first option votes for the key, second option abstains |

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::{AssessmentError, Dimension, Framework};

/// A parsed weight payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightSpec {
    Positional(Vec<f64>),
    PerOption(Vec<BTreeMap<String, f64>>),
    ByOption(BTreeMap<String, BTreeMap<String, f64>>),
    Scale(BTreeMap<String, Vec<f64>>),
    Polar(BTreeMap<String, f64>),
}

/// A single resolved vote or scale value for one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub dimension: Dimension,
    pub delta: f64,
}

/// Context needed to resolve a weight for one answer.
#[derive(Debug, Clone, Copy)]
pub struct SelectedOption<'a> {
    pub framework: Framework,
    pub category: &'a str,
    pub answer_text: &'a str,
    pub index: usize,
    pub option_count: usize,
}

impl WeightSpec {
    pub fn from_value(value: &Value) -> Result<Self, AssessmentError> {
        if value.is_null() {
            return Err(AssessmentError::malformed("question weight is missing"));
        }
        serde_json::from_value(value.clone()).map_err(|_| {
            AssessmentError::malformed(format!("unsupported weight encoding: {}", value))
        })
    }

    /// Resolves the contributions of the selected option.
    ///
    /// # Edge Cases
    ///
    /// - Any unknown dimension label fails the whole answer
    /// - Map-encoded entries with delta <= 0 are not votes
    /// - A positional list shorter than the option list fails the answer
    pub fn contributions(
        &self,
        selected: SelectedOption<'_>,
    ) -> Result<Vec<Contribution>, AssessmentError> {
        let resolve = |label: &str| {
            Dimension::parse(selected.framework, label).ok_or_else(|| {
                AssessmentError::malformed(format!(
                    "unknown {} dimension '{}'",
                    selected.framework, label
                ))
            })
        };

        match self {
            WeightSpec::Positional(deltas) => {
                let delta = positional(deltas, selected.index)?;
                Ok(vec![Contribution {
                    dimension: resolve(selected.category)?,
                    delta,
                }])
            }
            WeightSpec::PerOption(maps) => {
                let map = maps.get(selected.index).ok_or_else(|| {
                    AssessmentError::malformed(format!(
                        "no weight entry for option {}",
                        selected.index
                    ))
                })?;
                votes(map, resolve)
            }
            WeightSpec::ByOption(by_text) => {
                let map = by_text
                    .get(selected.answer_text)
                    .or_else(|| by_text.get(selected.answer_text.trim()))
                    .ok_or_else(|| {
                        AssessmentError::malformed(format!(
                            "no weight entry for option '{}'",
                            selected.answer_text
                        ))
                    })?;
                votes(map, resolve)
            }
            WeightSpec::Scale(by_dimension) => {
                if by_dimension.is_empty() {
                    return Err(AssessmentError::malformed("empty scale weight"));
                }
                by_dimension
                    .iter()
                    .map(|(label, deltas)| {
                        Ok(Contribution {
                            dimension: resolve(label)?,
                            delta: positional(deltas, selected.index)?,
                        })
                    })
                    .collect()
            }
            WeightSpec::Polar(weights) => polar(weights, selected, resolve),
        }
    }
}

fn positional(deltas: &[f64], index: usize) -> Result<f64, AssessmentError> {
    deltas.get(index).copied().ok_or_else(|| {
        AssessmentError::malformed(format!(
            "weight list has {} entries, option index is {}",
            deltas.len(),
            index
        ))
    })
}

fn votes<F>(map: &BTreeMap<String, f64>, resolve: F) -> Result<Vec<Contribution>, AssessmentError>
where
    F: Fn(&str) -> Result<Dimension, AssessmentError>,
{
    let mut out = Vec::new();
    for (label, &delta) in map {
        let dimension = resolve(label)?;
        if delta > 0.0 {
            out.push(Contribution { dimension, delta });
        }
    }
    Ok(out)
}

fn polar<F>(
    weights: &BTreeMap<String, f64>,
    selected: SelectedOption<'_>,
    resolve: F,
) -> Result<Vec<Contribution>, AssessmentError>
where
    F: Fn(&str) -> Result<Dimension, AssessmentError>,
{
    let positive: Vec<(&str, f64)> = weights
        .iter()
        .filter(|(_, w)| **w > 0.0)
        .map(|(label, w)| (label.as_str(), *w))
        .collect();
    let negative: Vec<(&str, f64)> = weights
        .iter()
        .filter(|(_, w)| **w < 0.0)
        .map(|(label, w)| (label.as_str(), *w))
        .collect();

    match (positive.as_slice(), negative.as_slice(), selected.option_count) {
        (&[(pos, pw)], &[(neg, nw)], 2) => {
            let (label, delta) = if selected.index == 0 { (pos, pw) } else { (neg, -nw) };
            Ok(vec![Contribution {
                dimension: resolve(label)?,
                delta,
            }])
        }
        (&[(pos, pw)], &[], 2) => {
            let dimension = resolve(pos)?;
            if selected.index == 0 {
                Ok(vec![Contribution {
                    dimension,
                    delta: pw,
                }])
            } else {
                Ok(Vec::new())
            }
        }
        _ => Err(AssessmentError::malformed(format!(
            "polar weight needs one positive and one negative pole over two options, got {:?} with {} options",
            weights, selected.option_count
        ))),
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::answers::check_answers;
use crate::definition::{ScaleDefinition, Scoring};
use crate::error::ScaleError;

/// A dimension's raw sum and its rescaled score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionScore {
    pub id: String,
    pub name: String,
    pub raw: u32,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Score {
    pub total: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<DimensionScore>,
}

/// Score a complete answer vector.
///
/// The vector is checked first, so an unanswered slot or a value outside the
/// question's options is an error rather than a silently wrong total.
pub fn score(definition: &ScaleDefinition, answers: &[Option<u32>]) -> Result<Score, ScaleError> {
    let values = check_answers(definition, answers)?;
    Ok(score_values(definition, &values))
}

/// Score values that have already passed [`check_answers`].
pub fn score_values(definition: &ScaleDefinition, values: &[u32]) -> Score {
    match &definition.scoring {
        Scoring::Sum => Score {
            total: values.iter().sum(),
            dimensions: Vec::new(),
        },
        Scoring::Reversed { items } => {
            let total = values
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    if items.contains(&i) {
                        reverse(definition, i, v)
                    } else {
                        v
                    }
                })
                .sum();
            Score {
                total,
                dimensions: Vec::new(),
            }
        }
        Scoring::Dimensions {
            multiplier,
            dimensions,
        } => {
            let dimensions = dimensions
                .iter()
                .map(|d| {
                    let raw: u32 = d.items.iter().filter_map(|&i| values.get(i)).sum();
                    DimensionScore {
                        id: d.id.clone(),
                        name: d.name.clone(),
                        raw,
                        score: raw * multiplier,
                    }
                })
                .collect();
            Score {
                total: values.iter().sum(),
                dimensions,
            }
        }
    }
}

/// Mirror `value` within the question's option range.
fn reverse(definition: &ScaleDefinition, index: usize, value: u32) -> u32 {
    match definition.options.value_range(index) {
        Some((min, max)) => (min + max).saturating_sub(value),
        None => value,
    }
}

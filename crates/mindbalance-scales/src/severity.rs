use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::definition::{Basis, Classifier, ExtraRule, ScaleDefinition, Scoring, Severity};
use crate::scoring::Score;

/// Supplementary content produced alongside a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Extra {
    /// An item flagged as a safety risk was answered above zero.
    SafetyRisk { item: usize, message: String },
    Dimensions {
        dimensions: Vec<DimensionVerdict>,
        note: String,
    },
    Percentage { percent: u32, note: String },
    Note { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionVerdict {
    pub id: String,
    pub name: String,
    pub score: u32,
    pub severity: Severity,
}

impl Classifier {
    /// The value compared against the bands for a given total.
    pub fn basis_value(&self, total: u32, item_count: usize) -> f64 {
        match self.basis {
            Basis::Total => f64::from(total),
            Basis::Scaled { factor } => f64::from(total) * f64::from(factor),
            Basis::ItemMean if item_count == 0 => 0.0,
            Basis::ItemMean => f64::from(total) / item_count as f64,
        }
    }

    /// First band admitting `value`, or the top band.
    pub fn band_for(&self, value: f64) -> &Severity {
        self.bands
            .iter()
            .find(|b| b.ceiling.admits(value))
            .map(|b| &b.severity)
            .unwrap_or(&self.top)
    }
}

/// Map a total to the scale's severity verdict.
pub fn classify(definition: &ScaleDefinition, total: u32) -> &Severity {
    let classifier = &definition.classifier;
    classifier.band_for(classifier.basis_value(total, definition.item_count()))
}

/// Supplementary content for a scored vector. `values` are the raw answers.
///
/// Independent of [`classify`]: a safety flag never changes the verdict.
pub fn extras_for(definition: &ScaleDefinition, score: &Score, values: &[u32]) -> Vec<Extra> {
    definition
        .extras
        .iter()
        .filter_map(|rule| match rule {
            ExtraRule::ItemRisk { item, message } => values
                .get(*item)
                .filter(|&&v| v > 0)
                .map(|_| Extra::SafetyRisk {
                    item: *item,
                    message: message.clone(),
                }),
            ExtraRule::DimensionBreakdown { note } => Some(Extra::Dimensions {
                dimensions: dimension_verdicts(definition, score),
                note: note.clone(),
            }),
            ExtraRule::Percentage { factor, note } => Some(Extra::Percentage {
                percent: score.total * factor,
                note: note.clone(),
            }),
            ExtraRule::Note { text } => Some(Extra::Note { text: text.clone() }),
        })
        .collect()
}

fn dimension_verdicts(definition: &ScaleDefinition, score: &Score) -> Vec<DimensionVerdict> {
    let Scoring::Dimensions { dimensions, .. } = &definition.scoring else {
        return Vec::new();
    };

    dimensions
        .iter()
        .filter_map(|d| {
            let scored = score.dimensions.iter().find(|s| s.id == d.id)?;
            let value = d.classifier.basis_value(scored.score, d.items.len());
            Some(DimensionVerdict {
                id: d.id.clone(),
                name: d.name.clone(),
                score: scored.score,
                severity: d.classifier.band_for(value).clone(),
            })
        })
        .collect()
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One selectable answer: the text shown to the respondent and the value it scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub value: u32,
}

/// The answer choices offered by a scale.
///
/// Most scales share one option set across every question. A few (AUDIT,
/// AUDIT-C) ask differently worded questions with their own choices, so each
/// position carries its own set.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "options", rename_all = "snake_case")]
#[ts(export)]
pub enum OptionsSpec {
    Uniform(Vec<AnswerOption>),
    PerQuestion(Vec<Vec<AnswerOption>>),
}

impl OptionsSpec {
    /// The options offered for the question at `index`.
    ///
    /// Returns `None` only for a per-question set indexed past its end.
    pub fn for_question(&self, index: usize) -> Option<&[AnswerOption]> {
        match self {
            OptionsSpec::Uniform(options) => Some(options),
            OptionsSpec::PerQuestion(sets) => sets.get(index).map(Vec::as_slice),
        }
    }

    /// Smallest and largest value offered for the question at `index`.
    pub fn value_range(&self, index: usize) -> Option<(u32, u32)> {
        let options = self.for_question(index)?;
        let min = options.iter().map(|o| o.value).min()?;
        let max = options.iter().map(|o| o.value).max()?;
        Some((min, max))
    }

    /// Whether `value` is one of the choices for the question at `index`.
    pub fn permits(&self, index: usize, value: u32) -> bool {
        self.for_question(index)
            .is_some_and(|options| options.iter().any(|o| o.value == value))
    }
}

/// Ordered concern tiers, low to high. The display vocabulary differs per
/// scale; only this ordering is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tier {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

/// A severity verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Severity {
    /// Stable machine-readable tag, e.g. `"modsev"`.
    pub key: String,
    pub label: String,
    pub badge: Tier,
    pub advice: String,
}

/// Upper edge of a severity band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Ceiling {
    /// Admits values `<= c`.
    AtMost(f64),
    /// Admits values `< c`.
    Below(f64),
}

impl Ceiling {
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Ceiling::AtMost(c) => value <= c,
            Ceiling::Below(c) => value < c,
        }
    }

    pub fn bound(&self) -> f64 {
        match *self {
            Ceiling::AtMost(c) | Ceiling::Below(c) => c,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub ceiling: Ceiling,
    pub severity: Severity,
}

/// The value a classifier compares against its bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Basis {
    /// The scored total.
    Total,
    /// `total * factor`, e.g. the WHO-5 percentage.
    Scaled { factor: u32 },
    /// `total / item_count`.
    ItemMean,
}

/// Ascending band table. Bands are scanned in order and the first one whose
/// ceiling admits the value wins; anything above every ceiling lands in `top`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Classifier {
    pub basis: Basis,
    pub bands: Vec<Band>,
    pub top: Severity,
}

/// A fixed subset of items summed and rescaled on its own, with its own cutoffs.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dimension {
    pub id: String,
    pub name: String,
    /// 0-based item positions.
    pub items: Vec<usize>,
    pub classifier: Classifier,
}

/// How answers reduce to a total.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Scoring {
    /// Sum of raw values.
    Sum,
    /// Sum where the listed items contribute `min + max - value`.
    Reversed { items: Vec<usize> },
    /// Sum of raw values, plus per-dimension sums multiplied by `multiplier`.
    Dimensions {
        multiplier: u32,
        dimensions: Vec<Dimension>,
    },
}

/// Supplementary output attached to a verdict.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ExtraRule {
    /// Raise `message` whenever the answer at `item` is above zero.
    ItemRisk { item: usize, message: String },
    /// Report each scoring dimension with its own verdict.
    DimensionBreakdown { note: String },
    /// Report `total * factor` as a percentage.
    Percentage { factor: u32, note: String },
    /// Unconditional advisory note.
    Note { text: String },
}

/// A questionnaire and the rules that score and classify it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDefinition {
    pub id: String,
    pub title: String,
    /// Recall window shown to the respondent. Not used in scoring.
    pub timeframe: String,
    pub questions: Vec<String>,
    pub options: OptionsSpec,
    /// Maximum attainable total, for display.
    pub max: u32,
    pub scoring: Scoring,
    pub classifier: Classifier,
    pub extras: Vec<ExtraRule>,
}

impl ScaleDefinition {
    pub fn item_count(&self) -> usize {
        self.questions.len()
    }

    /// Sum of each question's largest option value.
    pub fn attainable_max(&self) -> u32 {
        (0..self.item_count())
            .filter_map(|i| self.options.value_range(i))
            .map(|(_, max)| max)
            .sum()
    }

    /// Sum of each question's smallest option value.
    pub fn attainable_min(&self) -> u32 {
        (0..self.item_count())
            .filter_map(|i| self.options.value_range(i))
            .map(|(min, _)| min)
            .sum()
    }
}

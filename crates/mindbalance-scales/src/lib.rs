//! mindbalance-scales
//!
//! Psychometric scale definitions and the rules that score and classify
//! them. Pure data and pure functions: no I/O, no shared mutable state.
//! Definitions are built once and shared read-only by every caller.

pub mod answers;
pub mod category;
pub mod definition;
pub mod error;
pub mod scales;
pub mod scoring;
pub mod severity;

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use answers::check_answers;
use definition::{ScaleDefinition, Severity};
use error::ScaleError;
use scoring::{DimensionScore, score_values};
use severity::{Extra, classify, extras_for};

struct Registry {
    scales: Vec<ScaleDefinition>,
    by_id: HashMap<String, usize>,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    let scales = vec![
        scales::phq::phq9(),
        scales::gad::gad7(),
        scales::phq::phq2(),
        scales::dass21::dass21(),
        scales::audit::audit10(),
        scales::pss10::pss10(),
        scales::phq::phq15(),
        scales::isi::isi(),
        scales::k10::k10(),
        scales::who5::who5(),
        scales::gad::gad2(),
        scales::audit::auditc(),
        scales::rses::rses(),
        scales::cdrisc::cdrisc(),
        scales::swls::swls(),
        scales::spin::spin(),
        scales::maas::maas(),
        scales::gq6::gq6(),
    ];
    let by_id = scales
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id.clone(), i))
        .collect();
    Registry { scales, by_id }
});

/// Return all registered scales, in catalogue order.
pub fn all_scales() -> &'static [ScaleDefinition] {
    &REGISTRY.scales
}

/// Look up a scale by ID.
pub fn get_scale(id: &str) -> Result<&'static ScaleDefinition, ScaleError> {
    REGISTRY
        .by_id
        .get(id)
        .map(|&i| &REGISTRY.scales[i])
        .ok_or_else(|| ScaleError::UnknownScale(id.to_string()))
}

/// The scored and classified result of one completed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission {
    pub scale_id: String,
    pub scale_title: String,
    pub total: u32,
    pub max: u32,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<DimensionScore>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<Extra>,
}

impl Submission {
    pub fn has_safety_risk(&self) -> bool {
        self.extras
            .iter()
            .any(|e| matches!(e, Extra::SafetyRisk { .. }))
    }
}

/// Confirm an answer vector fits the scale: right length, fully answered,
/// and every value offered for its position.
pub fn validate(scale_id: &str, answers: &[Option<u32>]) -> Result<(), ScaleError> {
    let definition = get_scale(scale_id)?;
    check_answers(definition, answers).map(|_| ())
}

/// Score and classify a completed questionnaire.
pub fn submit(scale_id: &str, answers: &[Option<u32>]) -> Result<Submission, ScaleError> {
    let definition = get_scale(scale_id)?;
    definition.submit(answers)
}

impl ScaleDefinition {
    /// Score, classify and collect extras for this scale.
    pub fn submit(&self, answers: &[Option<u32>]) -> Result<Submission, ScaleError> {
        let values = check_answers(self, answers)?;
        let score = score_values(self, &values);
        let severity = classify(self, score.total).clone();
        let extras = extras_for(self, &score, &values);

        Ok(Submission {
            scale_id: self.id.clone(),
            scale_title: self.title.clone(),
            total: score.total,
            max: self.max,
            severity,
            dimensions: score.dimensions,
            extras,
        })
    }

    /// Format a submission as structured text for an interpretation prompt.
    pub fn to_structured_input(&self, submission: &Submission) -> String {
        let mut output = format!("## {}\n\n", self.title);
        output.push_str(&format!("- Timeframe: {}\n", self.timeframe));
        output.push_str(&format!("- Score: {} / {}\n", submission.total, self.max));
        output.push_str(&format!("- Result: {}\n", submission.severity.label));

        for extra in &submission.extras {
            match extra {
                Extra::Dimensions { dimensions, .. } => {
                    output.push_str("\n### Dimensions\n");
                    for d in dimensions {
                        output.push_str(&format!(
                            "- {}: {} ({})\n",
                            d.name, d.score, d.severity.label
                        ));
                    }
                }
                Extra::Percentage { percent, .. } => {
                    output.push_str(&format!("- Percentage: {percent}%\n"));
                }
                Extra::SafetyRisk { item, .. } => {
                    output.push_str(&format!("- Safety item {} answered above zero\n", item + 1));
                }
                Extra::Note { .. } => {}
            }
        }
        output
    }
}

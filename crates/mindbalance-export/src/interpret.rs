//! Template-filled interpretation of a result.
//!
//! Verdicts with a pre-written reading get that reading; everything else
//! gets a generic one built from the title, score and label. The severity
//! label is display text from the scoring side and is passed through
//! untouched.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use tracing::debug;

use mindbalance_core::models::interpretation::Interpretation;
use mindbalance_scales::Submission;
use mindbalance_scales::severity::Extra;

use crate::error::ExportError;
use crate::readings::{READINGS, reading_for};

const GENERIC: &str = "generic";

const GENERIC_TEMPLATE: &str =
    "Scale: {{ scale_title }}; result: {{ label }}; score: {{ total }} / {{ max }}";

const GENERIC_INSIGHTS: [&str; 3] = [
    "This result reflects how you have been feeling recently.",
    "Read it alongside what is actually going on in your life.",
    "Repeating the assessment from time to time helps you track changes.",
];

const GENERIC_SUGGESTIONS: [&str; 3] = [
    "Keep up a healthy lifestyle.",
    "If you feel persistently troubled, consult a professional and seek support.",
    "Share how you feel with someone you trust.",
];

const DISCLAIMER: &str =
    "This content is generated automatically and is not a medical diagnosis or treatment advice.";

/// Parsed once; a parse failure is reported on every render.
static TEMPLATES: LazyLock<Result<Tera, String>> = LazyLock::new(|| {
    let mut tera = Tera::default();
    let keyed = READINGS.iter().map(|r| (r.template_name(), r.summary));
    tera.add_raw_templates(keyed.chain([(GENERIC.to_string(), GENERIC_TEMPLATE)]))
        .map_err(|e| e.to_string())?;
    Ok(tera)
});

/// What the interpretation needs to know about a result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Selects a pre-written reading together with `key`.
    #[serde(default)]
    pub scale_id: String,
    /// Severity key, e.g. `"modsev"`.
    #[serde(default)]
    pub key: String,
    pub scale_title: String,
    pub label: String,
    pub total: u32,
    pub max: u32,
    #[serde(default)]
    pub advice: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
}

impl From<&Submission> for ResultSummary {
    fn from(submission: &Submission) -> Self {
        let warning = submission.extras.iter().find_map(|e| match e {
            Extra::SafetyRisk { message, .. } => Some(message.clone()),
            _ => None,
        });
        Self {
            scale_id: submission.scale_id.clone(),
            key: submission.severity.key.clone(),
            scale_title: submission.scale_title.clone(),
            label: submission.severity.label.clone(),
            total: submission.total,
            max: submission.max,
            advice: Some(submission.severity.advice.clone()),
            warning,
        }
    }
}

/// Interpret one result. A safety warning carried by the result takes
/// precedence over the reading's own warning.
pub fn interpret(
    summary: &ResultSummary,
    now: jiff::Timestamp,
) -> Result<Interpretation, ExportError> {
    let tera = TEMPLATES
        .as_ref()
        .map_err(|e| ExportError::TemplateParse(e.clone()))?;
    let context = Context::from_serialize(summary)?;

    let interpretation = match reading_for(&summary.scale_id, &summary.key) {
        Some(reading) => {
            debug!(scale = %summary.scale_id, key = %summary.key, "using keyed reading");
            Interpretation {
                summary: tera.render(&reading.template_name(), &context)?,
                insights: with_disclaimer(reading.insights),
                suggestions: owned(reading.suggestions),
                warning: summary
                    .warning
                    .clone()
                    .or_else(|| reading.warning.map(str::to_string)),
                timestamp: now,
            }
        }
        None => {
            debug!(scale = %summary.scale_title, "using generic reading");
            let mut suggestions: Vec<String> = summary
                .advice
                .iter()
                .filter(|a| !a.is_empty())
                .cloned()
                .collect();
            suggestions.extend(owned(&GENERIC_SUGGESTIONS));
            Interpretation {
                summary: tera.render(GENERIC, &context)?,
                insights: with_disclaimer(&GENERIC_INSIGHTS),
                suggestions,
                warning: summary.warning.clone(),
                timestamp: now,
            }
        }
    };
    Ok(interpretation)
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

fn with_disclaimer(lines: &[&str]) -> Vec<String> {
    let mut out = owned(lines);
    out.push(DISCLAIMER.to_string());
    out
}

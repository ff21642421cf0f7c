use serde::{Deserialize, Serialize};

use mindbalance_core::models::gratitude::GratitudeEntry;
use mindbalance_core::models::mood::MoodEntry;
use mindbalance_core::models::record::AssessmentRecord;

use crate::error::ExportError;

pub const EXPORT_VERSION: &str = "1.0.0";

/// Full history export, readable back by the sync upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportBundle {
    pub export_date: jiff::Timestamp,
    pub version: String,
    pub assessments: Vec<AssessmentRecord>,
    #[serde(default)]
    pub mood_entries: Vec<MoodEntry>,
    #[serde(default)]
    pub gratitude_entries: Vec<GratitudeEntry>,
}

impl ExportBundle {
    pub fn new(
        assessments: Vec<AssessmentRecord>,
        mood_entries: Vec<MoodEntry>,
        gratitude_entries: Vec<GratitudeEntry>,
        now: jiff::Timestamp,
    ) -> Self {
        Self {
            export_date: now,
            version: EXPORT_VERSION.to_string(),
            assessments,
            mood_entries,
            gratitude_entries,
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `mindbalance-{kind}-YYYY-MM-DD.{extension}`, dated in UTC.
pub fn file_name(kind: &str, extension: &str, now: jiff::Timestamp) -> String {
    format!("mindbalance-{kind}-{}.{extension}", now.strftime("%Y-%m-%d"))
}

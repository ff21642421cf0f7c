use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Plain-language reading of a result, filled from a template.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub summary: String,
    pub insights: Vec<String>,
    pub suggestions: Vec<String>,
    pub warning: Option<String>,
    pub timestamp: jiff::Timestamp,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::mood::check_mood;
use crate::models::resolve_client_id;

/// One gratitude journal line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GratitudeEntry {
    pub id: Uuid,
    pub user_id: String,
    pub content: String,
    /// Optional mood on the same 1 to 5 scale as mood entries.
    pub mood: Option<u8>,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewGratitude {
    pub content: String,
    #[serde(default)]
    pub mood: Option<u8>,
}

impl NewGratitude {
    pub fn into_entry(
        self,
        user_id: impl Into<String>,
        created_at: jiff::Timestamp,
    ) -> Result<GratitudeEntry, CoreError> {
        Ok(GratitudeEntry {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            content: check_content(self.content)?,
            mood: self.mood.map(check_mood).transpose()?,
            created_at,
        })
    }
}

/// A journal entry as uploaded by a syncing client, which calls the
/// timestamp `date`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImportedGratitude {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub mood: Option<u8>,
    #[serde(default, alias = "date")]
    pub created_at: Option<jiff::Timestamp>,
}

impl ImportedGratitude {
    pub fn into_entry(
        self,
        user_id: impl Into<String>,
        now: jiff::Timestamp,
    ) -> Result<GratitudeEntry, CoreError> {
        Ok(GratitudeEntry {
            id: resolve_client_id(&self.id)?,
            user_id: user_id.into(),
            content: check_content(self.content)?,
            mood: self.mood.map(check_mood).transpose()?,
            created_at: self.created_at.unwrap_or(now),
        })
    }
}

fn check_content(content: String) -> Result<String, CoreError> {
    if content.trim().is_empty() {
        Err(CoreError::EmptyContent)
    } else {
        Ok(content)
    }
}

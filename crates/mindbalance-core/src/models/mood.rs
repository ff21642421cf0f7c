use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::resolve_client_id;

pub const MOOD_MIN: u8 = 1;
pub const MOOD_MAX: u8 = 5;

pub fn check_mood(mood: u8) -> Result<u8, CoreError> {
    if (MOOD_MIN..=MOOD_MAX).contains(&mood) {
        Ok(mood)
    } else {
        Err(CoreError::InvalidMood(mood))
    }
}

/// A user's mood for one calendar day. There is at most one per user per date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_id: String,
    /// 1 (very low) to 5 (very good).
    pub mood: u8,
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: Date,
}

/// A mood logged through the API. `date` defaults to today (UTC).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewMood {
    pub mood: u8,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date: Option<Date>,
}

impl NewMood {
    pub fn into_entry(
        self,
        user_id: impl Into<String>,
        today: Date,
    ) -> Result<MoodEntry, CoreError> {
        Ok(MoodEntry {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            mood: check_mood(self.mood)?,
            note: non_empty(self.note),
            tags: self.tags,
            date: self.date.unwrap_or(today),
        })
    }
}

/// A mood as uploaded by a syncing client.
///
/// Clients omit the id and may send a full timestamp as the date; only its
/// `YYYY-MM-DD` prefix is kept.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImportedMood {
    #[serde(default)]
    pub id: Option<String>,
    pub mood: u8,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl ImportedMood {
    pub fn into_entry(
        self,
        user_id: impl Into<String>,
        today: Date,
    ) -> Result<MoodEntry, CoreError> {
        let user_id = user_id.into();
        let date = match self.date.as_deref() {
            Some(raw) => raw.get(..10).unwrap_or(raw).parse::<Date>()?,
            None => today,
        };
        let id = match self.id.as_deref() {
            Some(id) => resolve_client_id(id)?,
            None => resolve_client_id(&format!("{user_id}:{date}"))?,
        };

        Ok(MoodEntry {
            id,
            user_id,
            mood: check_mood(self.mood)?,
            note: non_empty(self.note),
            tags: self.tags,
            date,
        })
    }
}

fn non_empty(note: Option<String>) -> Option<String> {
    note.filter(|n| !n.trim().is_empty())
}

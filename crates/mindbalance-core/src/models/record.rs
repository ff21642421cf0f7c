use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::resolve_client_id;

/// A saved assessment: the answers a user gave and the verdict they received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub user_id: String,
    pub scale_id: String,
    pub scale_title: String,
    pub total: u32,
    pub max: u32,
    pub label: String,
    pub values: Vec<u32>,
    pub created_at: jiff::Timestamp,
}

impl AssessmentRecord {
    /// Total as a share of the maximum, in percent. Zero when `max` is zero.
    pub fn percentage(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        f64::from(self.total) / f64::from(self.max) * 100.0
    }
}

/// The fields a client supplies when saving a record; the store assigns
/// `id` and `created_at` unless they are carried over from an import.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewRecord {
    pub scale_id: String,
    pub scale_title: String,
    pub total: u32,
    pub max: u32,
    pub label: String,
    pub values: Vec<u32>,
}

impl NewRecord {
    pub fn into_record(
        self,
        user_id: impl Into<String>,
        created_at: jiff::Timestamp,
    ) -> AssessmentRecord {
        AssessmentRecord {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            scale_id: self.scale_id,
            scale_title: self.scale_title,
            total: self.total,
            max: self.max,
            label: self.label,
            values: self.values,
            created_at,
        }
    }
}

/// A record as uploaded by a syncing client.
///
/// Offline clients send camelCase keys, millisecond-string ids and a
/// millisecond `timestamp`; server exports use snake_case, uuids and
/// `created_at`. Both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImportedRecord {
    pub id: String,
    #[serde(alias = "scaleId")]
    pub scale_id: String,
    #[serde(alias = "scaleTitle")]
    pub scale_title: String,
    pub total: u32,
    pub max: u32,
    pub label: String,
    #[serde(default)]
    pub values: Vec<u32>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub created_at: Option<jiff::Timestamp>,
}

impl ImportedRecord {
    /// Convert to a stored record owned by `user_id`. Records with neither
    /// `timestamp` nor `created_at` are stamped with `now`.
    pub fn into_record(
        self,
        user_id: impl Into<String>,
        now: jiff::Timestamp,
    ) -> Result<AssessmentRecord, CoreError> {
        let id = resolve_client_id(&self.id)?;
        let created_at = match (self.timestamp, self.created_at) {
            (Some(ms), _) => jiff::Timestamp::from_millisecond(ms)?,
            (None, Some(ts)) => ts,
            (None, None) => now,
        };

        Ok(AssessmentRecord {
            id,
            user_id: user_id.into(),
            scale_id: self.scale_id,
            scale_title: self.scale_title,
            total: self.total,
            max: self.max,
            label: self.label,
            values: self.values,
            created_at,
        })
    }
}

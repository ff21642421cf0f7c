//! In-memory storage for assessments, moods and gratitude entries.
//!
//! Holds data for every user. Callers that share a store across tasks wrap
//! it in their own lock.

use std::collections::HashMap;

use jiff::civil::Date;
use tracing::debug;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::gratitude::GratitudeEntry;
use crate::models::mood::MoodEntry;
use crate::models::record::AssessmentRecord;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<Uuid, AssessmentRecord>,
    moods: HashMap<(String, Date), MoodEntry>,
    gratitude: HashMap<Uuid, GratitudeEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored assessment records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Save a new record.
    pub fn insert(&mut self, record: AssessmentRecord) {
        debug!(record_id = %record.id, user_id = %record.user_id, "inserting assessment");
        self.records.insert(record.id, record);
    }

    /// Insert or replace by id. Returns `true` when an existing record was
    /// replaced. The replacement carries its own owner.
    pub fn upsert(&mut self, record: AssessmentRecord) -> bool {
        let id = record.id;
        let replaced = self.records.insert(id, record).is_some();
        debug!(record_id = %id, replaced, "upserted assessment");
        replaced
    }

    /// A user's records, most recent first.
    pub fn list_for_user(&self, user_id: &str) -> Vec<AssessmentRecord> {
        let mut records: Vec<AssessmentRecord> = self
            .records
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        records
    }

    pub fn get(&self, user_id: &str, id: Uuid) -> Option<&AssessmentRecord> {
        self.records.get(&id).filter(|r| r.user_id == user_id)
    }

    /// Delete a record only if it belongs to `user_id`.
    pub fn delete(&mut self, user_id: &str, id: Uuid) -> Result<AssessmentRecord, CoreError> {
        if self.get(user_id, id).is_none() {
            return Err(CoreError::NotFound(id));
        }
        self.records.remove(&id).ok_or(CoreError::NotFound(id))
    }

    /// Record a mood for the entry's date. A second mood on the same date
    /// replaces mood, note and tags but keeps the first entry's id.
    pub fn record_mood(&mut self, entry: MoodEntry) -> MoodEntry {
        let key = (entry.user_id.clone(), entry.date);
        let stored = match self.moods.get(&key) {
            Some(existing) => MoodEntry {
                id: existing.id,
                ..entry
            },
            None => entry,
        };
        debug!(
            user_id = %stored.user_id,
            date = %stored.date,
            mood = stored.mood,
            "recorded mood"
        );
        self.moods.insert(key, stored.clone());
        stored
    }

    /// A user's moods on or after `since`, newest date first.
    pub fn moods_since(&self, user_id: &str, since: Date) -> Vec<MoodEntry> {
        let mut moods: Vec<MoodEntry> = self
            .moods
            .values()
            .filter(|m| m.user_id == user_id && m.date >= since)
            .cloned()
            .collect();
        moods.sort_by(|a, b| b.date.cmp(&a.date));
        moods
    }

    /// Every mood a user has recorded, newest date first.
    pub fn moods_for_user(&self, user_id: &str) -> Vec<MoodEntry> {
        self.moods_since(user_id, Date::MIN)
    }

    pub fn insert_gratitude(&mut self, entry: GratitudeEntry) {
        debug!(entry_id = %entry.id, user_id = %entry.user_id, "inserting gratitude entry");
        self.gratitude.insert(entry.id, entry);
    }

    /// Insert or replace a journal entry by id. Returns `true` on replace.
    pub fn upsert_gratitude(&mut self, entry: GratitudeEntry) -> bool {
        let id = entry.id;
        let replaced = self.gratitude.insert(id, entry).is_some();
        debug!(entry_id = %id, replaced, "upserted gratitude entry");
        replaced
    }

    /// A user's journal, newest first, at most `limit` entries when given.
    pub fn gratitude_for_user(&self, user_id: &str, limit: Option<usize>) -> Vec<GratitudeEntry> {
        let mut entries: Vec<GratitudeEntry> = self
            .gratitude
            .values()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        entries
    }

    pub fn delete_gratitude(
        &mut self,
        user_id: &str,
        id: Uuid,
    ) -> Result<GratitudeEntry, CoreError> {
        match self.gratitude.get(&id) {
            Some(entry) if entry.user_id == user_id => {
                self.gratitude.remove(&id).ok_or(CoreError::NotFound(id))
            }
            _ => Err(CoreError::NotFound(id)),
        }
    }
}

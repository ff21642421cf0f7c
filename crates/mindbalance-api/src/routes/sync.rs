use axum::Json;
use axum::extract::{Path, State};
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use mindbalance_core::models::gratitude::{GratitudeEntry, ImportedGratitude};
use mindbalance_core::models::mood::{ImportedMood, MoodEntry};
use mindbalance_core::models::record::{AssessmentRecord, ImportedRecord};

use crate::audit::{AuditEvent, AuditResource};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SyncUpload {
    #[serde(default)]
    pub assessments: Vec<ImportedRecord>,
    #[serde(default, alias = "moodEntries")]
    pub mood_entries: Vec<ImportedMood>,
    #[serde(default, alias = "gratitudeEntries")]
    pub gratitude_entries: Vec<ImportedGratitude>,
}

/// `synced`/`replaced` count assessments.
#[derive(Serialize)]
pub struct SyncResult {
    synced: usize,
    replaced: usize,
    moods: usize,
    gratitude: usize,
}

#[derive(Serialize)]
pub struct SyncDownload {
    assessments: Vec<AssessmentRecord>,
    mood_entries: Vec<MoodEntry>,
    gratitude_entries: Vec<GratitudeEntry>,
}

/// Upsert uploaded assessments, moods and journal entries. The whole batch
/// is rejected if any entry is malformed.
pub async fn upload(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(body): ApiJson<SyncUpload>,
) -> Result<Json<SyncResult>, ApiError> {
    let now = jiff::Timestamp::now();
    let today = now.to_zoned(TimeZone::UTC).date();

    let records = body
        .assessments
        .into_iter()
        .map(|r| r.into_record(&user_id, now))
        .collect::<Result<Vec<_>, _>>()?;
    let moods = body
        .mood_entries
        .into_iter()
        .map(|m| m.into_entry(&user_id, today))
        .collect::<Result<Vec<_>, _>>()?;
    let gratitude = body
        .gratitude_entries
        .into_iter()
        .map(|g| g.into_entry(&user_id, now))
        .collect::<Result<Vec<_>, _>>()?;

    let result = SyncResult {
        synced: records.len(),
        replaced: 0,
        moods: moods.len(),
        gratitude: gratitude.len(),
    };

    let mut store = state.store.lock().await;
    let replaced = records
        .into_iter()
        .map(|record| store.upsert(record))
        .filter(|&replaced| replaced)
        .count();
    for mood in moods {
        store.record_mood(mood);
    }
    let gratitude_replaced = gratitude
        .into_iter()
        .map(|entry| store.upsert_gratitude(entry))
        .filter(|&replaced| replaced)
        .count();
    drop(store);

    AuditEvent::synced(&user_id, AuditResource::Assessment, result.synced, replaced).emit();
    if result.moods > 0 {
        AuditEvent::synced(&user_id, AuditResource::Mood, result.moods, 0).emit();
    }
    if result.gratitude > 0 {
        AuditEvent::synced(
            &user_id,
            AuditResource::Gratitude,
            result.gratitude,
            gratitude_replaced,
        )
        .emit();
    }

    Ok(Json(SyncResult { replaced, ..result }))
}

pub async fn download(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<SyncDownload> {
    let store = state.store.lock().await;
    Json(SyncDownload {
        assessments: store.list_for_user(&user_id),
        mood_entries: store.moods_for_user(&user_id),
        gratitude_entries: store.gratitude_for_user(&user_id, None),
    })
}

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use jiff::ToSpan;
use jiff::tz::TimeZone;
use serde::Deserialize;

use mindbalance_core::models::mood::{MoodEntry, NewMood};

use crate::audit::{AuditEvent, AuditResource};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

const DEFAULT_DAYS: u32 = 30;
const MAX_DAYS: u32 = 3650;

#[derive(Debug, Deserialize)]
pub struct MoodQuery {
    pub days: Option<u32>,
}

/// Moods from the last `days` days (default 30), newest first.
pub async fn list_moods(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<MoodQuery>,
) -> Json<Vec<MoodEntry>> {
    let days = query.days.unwrap_or(DEFAULT_DAYS).min(MAX_DAYS);
    let today = jiff::Timestamp::now().to_zoned(TimeZone::UTC).date();
    let since = today.saturating_sub(i64::from(days).days());
    Json(state.store.lock().await.moods_since(&user_id, since))
}

/// Record today's mood, or the mood for `date` when given. Recording again
/// on the same date overwrites that day's entry.
pub async fn record_mood(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(body): ApiJson<NewMood>,
) -> Result<(StatusCode, Json<MoodEntry>), ApiError> {
    let today = jiff::Timestamp::now().to_zoned(TimeZone::UTC).date();
    let entry = body.into_entry(&user_id, today)?;
    let stored = state.store.lock().await.record_mood(entry);

    AuditEvent::created(&user_id, AuditResource::Mood, stored.id).emit();
    Ok((StatusCode::CREATED, Json(stored)))
}

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use mindbalance_core::models::gratitude::{GratitudeEntry, NewGratitude};

use crate::audit::{AuditEvent, AuditResource};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 500;

#[derive(Debug, Deserialize)]
pub struct GratitudeQuery {
    pub limit: Option<usize>,
}

/// Journal entries, newest first.
pub async fn list_gratitude(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<GratitudeQuery>,
) -> Json<Vec<GratitudeEntry>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    Json(state.store.lock().await.gratitude_for_user(&user_id, Some(limit)))
}

pub async fn create_gratitude(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(body): ApiJson<NewGratitude>,
) -> Result<(StatusCode, Json<GratitudeEntry>), ApiError> {
    let entry = body.into_entry(&user_id, jiff::Timestamp::now())?;
    state.store.lock().await.insert_gratitude(entry.clone());

    AuditEvent::created(&user_id, AuditResource::Gratitude, entry.id).emit();
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn delete_gratitude(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state.store.lock().await.delete_gratitude(&user_id, id)?;
    AuditEvent::deleted(&user_id, AuditResource::Gratitude, id).emit();
    Ok(StatusCode::NO_CONTENT)
}

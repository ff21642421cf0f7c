use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mindbalance_core::models::record::{AssessmentRecord, NewRecord};
use mindbalance_scales::Submission;
use mindbalance_scales::answers::AnswerVector;

use crate::audit::{AuditEvent, AuditResource};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAssessment {
    pub scale_id: String,
    pub answers: AnswerVector,
}

#[derive(Serialize)]
pub struct CreatedAssessment {
    record: AssessmentRecord,
    submission: Submission,
}

pub async fn list_assessments(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<AssessmentRecord>> {
    let store = state.store.lock().await;
    Json(store.list_for_user(&user_id))
}

/// Score the answers, then persist the verdict under `user_id`.
pub async fn create_assessment(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(body): ApiJson<CreateAssessment>,
) -> Result<(StatusCode, Json<CreatedAssessment>), ApiError> {
    let submission = mindbalance_scales::submit(&body.scale_id, &body.answers)?;

    let record = NewRecord {
        scale_id: submission.scale_id.clone(),
        scale_title: submission.scale_title.clone(),
        total: submission.total,
        max: submission.max,
        label: submission.severity.label.clone(),
        values: body.answers.iter().flatten().copied().collect(),
    }
    .into_record(&user_id, jiff::Timestamp::now());

    state.store.lock().await.insert(record.clone());

    AuditEvent::created(&user_id, AuditResource::Assessment, record.id)
        .with_safety_risk(submission.has_safety_risk())
        .emit();

    Ok((
        StatusCode::CREATED,
        Json(CreatedAssessment { record, submission }),
    ))
}

pub async fn delete_assessment(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state.store.lock().await.delete(&user_id, id)?;
    AuditEvent::deleted(&user_id, AuditResource::Assessment, id).emit();
    Ok(StatusCode::NO_CONTENT)
}

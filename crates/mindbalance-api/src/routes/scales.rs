use axum::Json;
use axum::extract::Path;
use serde::{Deserialize, Serialize};

use mindbalance_scales::answers::AnswerVector;
use mindbalance_scales::definition::ScaleDefinition;
use mindbalance_scales::{Submission, all_scales, get_scale};

use crate::error::ApiError;
use crate::extract::ApiJson;

#[derive(Serialize)]
pub struct ScaleSummary {
    id: String,
    title: String,
    timeframe: String,
    item_count: usize,
    max: u32,
}

/// Answers in question order; `null` marks an unanswered question.
#[derive(Debug, Deserialize)]
pub struct AnswersBody {
    pub answers: AnswerVector,
}

#[derive(Serialize)]
pub struct Validity {
    valid: bool,
}

pub async fn list_scales() -> Json<Vec<ScaleSummary>> {
    let scales = all_scales()
        .iter()
        .map(|s| ScaleSummary {
            id: s.id.clone(),
            title: s.title.clone(),
            timeframe: s.timeframe.clone(),
            item_count: s.item_count(),
            max: s.max,
        })
        .collect();
    Json(scales)
}

pub async fn get_scale_detail(Path(id): Path<String>) -> Result<Json<ScaleDefinition>, ApiError> {
    let scale = get_scale(&id)?;
    Ok(Json(scale.clone()))
}

pub async fn validate_answers(
    Path(id): Path<String>,
    ApiJson(body): ApiJson<AnswersBody>,
) -> Result<Json<Validity>, ApiError> {
    mindbalance_scales::validate(&id, &body.answers)?;
    Ok(Json(Validity { valid: true }))
}

pub async fn submit_answers(
    Path(id): Path<String>,
    ApiJson(body): ApiJson<AnswersBody>,
) -> Result<Json<Submission>, ApiError> {
    let submission = mindbalance_scales::submit(&id, &body.answers)?;
    tracing::debug!(scale = %id, total = submission.total, "scored submission");
    Ok(Json(submission))
}

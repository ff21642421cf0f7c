use axum::Json;

use mindbalance_core::models::interpretation::Interpretation;
use mindbalance_export::interpret::{ResultSummary, interpret};

use crate::error::ApiError;
use crate::extract::ApiJson;

pub async fn interpret_result(
    ApiJson(summary): ApiJson<ResultSummary>,
) -> Result<Json<Interpretation>, ApiError> {
    let interpretation = interpret(&summary, jiff::Timestamp::now())?;
    Ok(Json(interpretation))
}

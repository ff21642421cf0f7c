use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use mindbalance_export::bundle::{ExportBundle, file_name};
use mindbalance_export::csv::records_to_csv;

use crate::error::ApiError;
use crate::state::AppState;

fn attachment(content_type: &str, name: String, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{name}\""),
            ),
        ],
        body,
    )
        .into_response()
}

pub async fn export_csv(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, ApiError> {
    let records = state.store.lock().await.list_for_user(&user_id);
    let body = records_to_csv(&records)?;
    let name = file_name("assessments", "csv", jiff::Timestamp::now());
    Ok(attachment("text/csv; charset=utf-8", name, body))
}

pub async fn export_json(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, ApiError> {
    let now = jiff::Timestamp::now();
    let store = state.store.lock().await;
    let bundle = ExportBundle::new(
        store.list_for_user(&user_id),
        store.moods_for_user(&user_id),
        store.gratitude_for_user(&user_id, None),
        now,
    );
    drop(store);
    let body = bundle.to_json()?;
    let name = file_name("assessments", "json", now);
    Ok(attachment("application/json", name, body.into_bytes()))
}

use axum::Json;
use axum::extract::{Path, State};
use jiff::tz::TimeZone;

use mindbalance_core::stats::{UserStats, user_stats};

use crate::state::AppState;

pub async fn get_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<UserStats> {
    let store = state.store.lock().await;
    let records = store.list_for_user(&user_id);
    let moods = store.moods_for_user(&user_id);
    let gratitude = store.gratitude_for_user(&user_id, None);
    drop(store);

    let today = jiff::Timestamp::now().to_zoned(TimeZone::UTC).date();
    Json(user_stats(&records, &moods, &gratitude, today))
}

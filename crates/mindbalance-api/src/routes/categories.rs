use axum::Json;

use mindbalance_scales::category::{Category, categories};

pub async fn list_categories() -> Json<Vec<Category>> {
    Json(categories().to_vec())
}

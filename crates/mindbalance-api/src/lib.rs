//! mindbalance-api
//!
//! HTTP surface over the scale engine and the assessment store.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod audit;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router with audit logging and permissive CORS.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Scale catalogue and stateless scoring
        .route("/scales", get(routes::scales::list_scales))
        .route("/scales/{id}", get(routes::scales::get_scale_detail))
        .route("/scales/{id}/validate", post(routes::scales::validate_answers))
        .route("/scales/{id}/submit", post(routes::scales::submit_answers))
        .route("/categories", get(routes::categories::list_categories))
        .route("/interpret", post(routes::interpret::interpret_result))
        // Per-user history
        .route(
            "/users/{user_id}/assessments",
            get(routes::assessments::list_assessments),
        )
        .route(
            "/users/{user_id}/assessments",
            post(routes::assessments::create_assessment),
        )
        .route(
            "/users/{user_id}/assessments/{id}",
            delete(routes::assessments::delete_assessment),
        )
        .route(
            "/users/{user_id}/mood",
            get(routes::mood::list_moods).post(routes::mood::record_mood),
        )
        .route(
            "/users/{user_id}/gratitude",
            get(routes::gratitude::list_gratitude).post(routes::gratitude::create_gratitude),
        )
        .route(
            "/users/{user_id}/gratitude/{id}",
            delete(routes::gratitude::delete_gratitude),
        )
        .route("/users/{user_id}/sync/upload", post(routes::sync::upload))
        .route("/users/{user_id}/sync/download", get(routes::sync::download))
        .route("/users/{user_id}/stats", get(routes::stats::get_stats))
        .route("/users/{user_id}/export.csv", get(routes::export::export_csv))
        .route("/users/{user_id}/export.json", get(routes::export::export_json))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}

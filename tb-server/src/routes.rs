use crate::{
    AppState, health,
    api::{backlog::backlog, sprints::sprints, tasks::tasks},
};

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Service index
        .route("/", get(index))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Task endpoints
        .route("/api/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/api/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        // Sprint endpoints
        .route(
            "/api/sprints",
            get(sprints::list_sprints).post(sprints::create_sprint),
        )
        .route(
            "/api/sprints/{id}",
            get(sprints::get_sprint)
                .put(sprints::update_sprint)
                .delete(sprints::delete_sprint),
        )
        .route(
            "/api/sprints/{id}/add-task/{task_id}",
            put(sprints::add_task_to_sprint),
        )
        // Backlog endpoints
        .route(
            "/api/backlog",
            get(backlog::get_backlog).post(backlog::create_backlog),
        )
        .route(
            "/api/backlog/add-task/{task_id}",
            put(backlog::add_task_to_backlog),
        )
        // Unknown routes get the JSON envelope, not axum's bare 404
        .fallback(not_found)
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins for the board UI)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// GET / - service index
async fn index() -> Response {
    let body = json!({
        "success": true,
        "data": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": ["/api/tasks", "/api/sprints", "/api/backlog"],
        }
    });

    (StatusCode::OK, Json(body)).into_response()
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": "route not found" })),
    )
        .into_response()
}

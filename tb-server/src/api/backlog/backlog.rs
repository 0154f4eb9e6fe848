//! Backlog REST API handlers
//!
//! The backlog is a singleton holding every task not assigned to a
//! sprint. Reads create it on first use; an explicit second create is
//! refused.

use crate::{ApiError, ApiResult, AppState, BacklogDto, BacklogResponse};

use tb_core::Backlog;
use tb_db::{BacklogRepository, TaskRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/backlog
///
/// Fetch the backlog with its member tasks resolved, creating the
/// singleton if it does not exist yet.
pub async fn get_backlog(State(state): State<AppState>) -> ApiResult<Json<BacklogResponse>> {
    let repo = BacklogRepository::new(state.pool.clone());
    let backlog = repo.find_or_create().await?;
    let tasks = repo.find_tasks().await?;

    Ok(Json(BacklogResponse {
        success: true,
        data: BacklogDto::new(backlog, tasks),
    }))
}

/// POST /api/backlog
///
/// Explicitly create the backlog. Refused when it already exists.
pub async fn create_backlog(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<BacklogResponse>)> {
    let repo = BacklogRepository::new(state.pool.clone());

    if repo.find().await?.is_some() {
        return Err(ApiError::conflict("A backlog already exists"));
    }

    let backlog = Backlog::new();
    repo.create(&backlog).await?;

    log::info!("Created backlog {}", backlog.id);

    Ok((
        StatusCode::CREATED,
        Json(BacklogResponse {
            success: true,
            data: BacklogDto::new(backlog, Vec::new()),
        }),
    ))
}

/// PUT /api/backlog/add-task/:task_id
///
/// Append an existing task to the backlog. A task the backlog already
/// holds is refused.
pub async fn add_task_to_backlog(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> ApiResult<Json<BacklogResponse>> {
    let task_id = Uuid::parse_str(&task_id)?;

    // 1. The task must exist
    let task_repo = TaskRepository::new(state.pool.clone());
    task_repo
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))?;

    // 2. Duplicate membership is refused
    let repo = BacklogRepository::new(state.pool.clone());
    repo.find_or_create().await?;
    if repo.contains_task(task_id).await? {
        return Err(ApiError::conflict("Task is already in the backlog"));
    }

    // 3. Append and return the updated backlog with members resolved
    repo.add_task(task_id).await?;

    log::info!("Added task {} to the backlog", task_id);

    let backlog = repo.find_or_create().await?;
    let tasks = repo.find_tasks().await?;

    Ok(Json(BacklogResponse {
        success: true,
        data: BacklogDto::new(backlog, tasks),
    }))
}

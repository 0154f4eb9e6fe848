//! Task REST API handlers
//!
//! Tasks are created into the backlog, may be assigned to one sprint,
//! and cannot be deleted while a sprint references them.

use crate::{
    ApiError, ApiResult, AppState, CreateTaskRequest, DeleteResponse, FieldError, ListTasksQuery,
    TaskDto, TaskListResponse, TaskResponse, UpdateTaskRequest,
};

use tb_core::{Task, TaskStatus};
use tb_db::{BacklogRepository, SprintRepository, TaskRepository};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

const STATUS_FIELD_MESSAGE: &str = "status must be one of: pending, in-progress, done";

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/tasks?status=&sortByDueDate=
///
/// List tasks, optionally filtered by status and sorted by due date.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<TaskListResponse>> {
    // A status value outside the enum means no filter, matching the
    // board UI's loose query contract
    let status = query
        .status
        .as_deref()
        .and_then(|s| TaskStatus::from_str(s).ok());
    let sort_by_due_date = query.sort_by_due_date.as_deref() == Some("true");

    let repo = TaskRepository::new(state.pool.clone());
    let tasks = repo.find_all(status, sort_by_due_date).await?;

    Ok(Json(TaskListResponse {
        success: true,
        count: tasks.len(),
        data: tasks.into_iter().map(TaskDto::from).collect(),
    }))
}

/// GET /api/tasks/:id
///
/// Get a single task by ID
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let repo = TaskRepository::new(state.pool.clone());
    let task = repo
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", id)))?;

    Ok(Json(TaskResponse {
        success: true,
        data: task.into(),
    }))
}

/// POST /api/tasks
///
/// Create a task and insert it into the backlog (creating the backlog
/// singleton on first use).
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    // 1. Validate fields, collecting every failure
    let mut errors = Vec::new();

    let title = req.title.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() {
        errors.push(FieldError::new("title", "title is required"));
    }

    let status = match req.status.as_deref() {
        Some(s) => match TaskStatus::from_str(s) {
            Ok(status) => Some(status),
            Err(_) => {
                errors.push(FieldError::new("status", STATUS_FIELD_MESSAGE));
                None
            }
        },
        None => None,
    };

    let due_date = match req.due_date {
        Some(ts) => match DateTime::from_timestamp(ts, 0) {
            Some(due) => Some(due),
            None => {
                errors.push(FieldError::new(
                    "dueDate",
                    format!("dueDate is not a valid timestamp: {}", ts),
                ));
                None
            }
        },
        None => {
            errors.push(FieldError::new("dueDate", "dueDate is required"));
            None
        }
    };

    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    // Guarded by the empty error list above
    let task = Task::new(
        title.to_string(),
        req.description,
        status,
        due_date.expect("validated above"),
        req.color,
    );

    // 2. Persist the task
    let repo = TaskRepository::new(state.pool.clone());
    repo.create(&task).await?;

    // 3. Insert into the backlog, creating the singleton if absent
    let backlog_repo = BacklogRepository::new(state.pool.clone());
    backlog_repo.find_or_create().await?;
    backlog_repo.add_task(task.id).await?;

    log::info!("Created task {} ({})", task.id, task.title);

    Ok((
        StatusCode::CREATED,
        Json(TaskResponse {
            success: true,
            data: task.into(),
        }),
    ))
}

/// PUT /api/tasks/:id
///
/// Partial update. Backlog/sprint membership is never touched here,
/// even when the status moves to done.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    // 1. Load existing task
    let repo = TaskRepository::new(state.pool.clone());
    let mut task = repo
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", id)))?;

    // 2. Validate and apply supplied fields
    let mut errors = Vec::new();

    if let Some(title) = &req.title {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            errors.push(FieldError::new("title", "title is required"));
        } else {
            task.title = trimmed.to_string();
        }
    }

    if let Some(description) = req.description {
        task.description = description;
    }

    if let Some(status) = &req.status {
        match TaskStatus::from_str(status) {
            Ok(status) => task.status = status,
            Err(_) => errors.push(FieldError::new("status", STATUS_FIELD_MESSAGE)),
        }
    }

    if let Some(ts) = req.due_date {
        match DateTime::from_timestamp(ts, 0) {
            Some(due) => task.due_date = due,
            None => errors.push(FieldError::new(
                "dueDate",
                format!("dueDate is not a valid timestamp: {}", ts),
            )),
        }
    }

    if let Some(color) = req.color {
        task.color = color;
    }

    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    // 3. Persist
    task.updated_at = Utc::now();
    repo.update(&task).await?;

    log::info!("Updated task {} ({})", task.id, task.title);

    Ok(Json(TaskResponse {
        success: true,
        data: task.into(),
    }))
}

/// DELETE /api/tasks/:id
///
/// Refused while any sprint references the task; otherwise deletes it
/// and drops the id from the backlog.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    // 1. A sprint-assigned task cannot be deleted
    let sprint_repo = SprintRepository::new(state.pool.clone());
    if sprint_repo.references_task(task_id).await? {
        return Err(ApiError::conflict(
            "Cannot delete a task assigned to a sprint",
        ));
    }

    // 2. Delete the task
    let repo = TaskRepository::new(state.pool.clone());
    repo.find_by_id(task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", id)))?;
    repo.delete(task_id).await?;

    // 3. Drop the reference from the backlog if present
    let backlog_repo = BacklogRepository::new(state.pool.clone());
    backlog_repo.remove_task(task_id).await?;

    log::info!("Deleted task {}", task_id);

    Ok(Json(DeleteResponse::new()))
}

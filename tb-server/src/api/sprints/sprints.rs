//! Sprint REST API handlers
//!
//! Sprints hold an ordered set of task references. Assigning a task to
//! a sprint removes it from the backlog; deleting a sprint returns its
//! tasks to the backlog.

use crate::{
    ApiError, ApiResult, AppState, CreateSprintRequest, DeleteResponse, FieldError, SprintDto,
    SprintListResponse, SprintResponse, UpdateSprintRequest,
};

use tb_core::Sprint;
use tb_db::{BacklogRepository, SprintRepository, TaskRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/sprints
///
/// List every sprint with its member tasks resolved.
pub async fn list_sprints(State(state): State<AppState>) -> ApiResult<Json<SprintListResponse>> {
    let repo = SprintRepository::new(state.pool.clone());
    let sprints = repo.find_all().await?;

    let mut data = Vec::with_capacity(sprints.len());
    for sprint in sprints {
        let tasks = repo.find_tasks(sprint.id).await?;
        data.push(SprintDto::new(sprint, tasks));
    }

    Ok(Json(SprintListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

/// GET /api/sprints/:id
///
/// Get a single sprint with its member tasks resolved
pub async fn get_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SprintResponse>> {
    let sprint_id = Uuid::parse_str(&id)?;

    let repo = SprintRepository::new(state.pool.clone());
    let sprint = repo
        .find_by_id(sprint_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Sprint {} not found", id)))?;
    let tasks = repo.find_tasks(sprint_id).await?;

    Ok(Json(SprintResponse {
        success: true,
        data: SprintDto::new(sprint, tasks),
    }))
}

/// POST /api/sprints
///
/// Create a sprint with an empty task set.
pub async fn create_sprint(
    State(state): State<AppState>,
    Json(req): Json<CreateSprintRequest>,
) -> ApiResult<(StatusCode, Json<SprintResponse>)> {
    // 1. Validate fields, collecting every failure
    let mut errors = Vec::new();

    let name = req.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        errors.push(FieldError::new("name", "name is required"));
    }

    let start_date = parse_date_field(req.start_date, "startDate", &mut errors);
    let end_date = parse_date_field(req.end_date, "endDate", &mut errors);

    // Range check only fires once both endpoints are valid
    if let (Some(start), Some(end)) = (start_date, end_date)
        && end < start
    {
        errors.push(FieldError::new(
            "endDate",
            "endDate must not be before startDate",
        ));
    }

    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    // Guarded by the empty error list above
    let sprint = Sprint::new(
        name.to_string(),
        start_date.expect("validated above"),
        end_date.expect("validated above"),
        req.color,
    );

    // 2. Persist
    let repo = SprintRepository::new(state.pool.clone());
    repo.create(&sprint).await?;

    log::info!("Created sprint {} ({})", sprint.id, sprint.name);

    Ok((
        StatusCode::CREATED,
        Json(SprintResponse {
            success: true,
            data: SprintDto::new(sprint, Vec::new()),
        }),
    ))
}

/// PUT /api/sprints/:id
///
/// Partial update. The date-range invariant is re-checked against the
/// merged values, so narrowing one endpoint past the other is refused.
pub async fn update_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateSprintRequest>,
) -> ApiResult<Json<SprintResponse>> {
    let sprint_id = Uuid::parse_str(&id)?;

    // 1. Load existing sprint
    let repo = SprintRepository::new(state.pool.clone());
    let mut sprint = repo
        .find_by_id(sprint_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Sprint {} not found", id)))?;

    // 2. Validate and apply supplied fields
    let mut errors = Vec::new();

    if let Some(name) = &req.name {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            errors.push(FieldError::new("name", "name is required"));
        } else {
            sprint.name = trimmed.to_string();
        }
    }

    if let Some(ts) = req.start_date {
        match DateTime::from_timestamp(ts, 0) {
            Some(start) => sprint.start_date = start,
            None => errors.push(FieldError::new(
                "startDate",
                format!("startDate is not a valid timestamp: {}", ts),
            )),
        }
    }
    if let Some(ts) = req.end_date {
        match DateTime::from_timestamp(ts, 0) {
            Some(end) => sprint.end_date = end,
            None => errors.push(FieldError::new(
                "endDate",
                format!("endDate is not a valid timestamp: {}", ts),
            )),
        }
    }

    if sprint.end_date < sprint.start_date {
        errors.push(FieldError::new(
            "endDate",
            "endDate must not be before startDate",
        ));
    }

    if let Some(color) = req.color {
        sprint.color = color;
    }

    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    // 3. Persist
    sprint.updated_at = Utc::now();
    repo.update(&sprint).await?;

    let tasks = repo.find_tasks(sprint_id).await?;

    log::info!("Updated sprint {} ({})", sprint.id, sprint.name);

    Ok(Json(SprintResponse {
        success: true,
        data: SprintDto::new(sprint, tasks),
    }))
}

/// DELETE /api/sprints/:id
///
/// Deletes the sprint and returns its tasks to the backlog. Tasks the
/// backlog already holds are not duplicated.
pub async fn delete_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let sprint_id = Uuid::parse_str(&id)?;

    let repo = SprintRepository::new(state.pool.clone());
    let sprint = repo
        .find_by_id(sprint_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Sprint {} not found", id)))?;

    // 1. Return member tasks to the backlog before the references vanish
    let backlog_repo = BacklogRepository::new(state.pool.clone());
    backlog_repo.find_or_create().await?;
    for task_id in &sprint.task_ids {
        backlog_repo.add_task(*task_id).await?;
    }

    // 2. Delete the sprint and its membership rows
    repo.delete(sprint_id).await?;

    log::info!(
        "Deleted sprint {}, returned {} task(s) to the backlog",
        sprint_id,
        sprint.task_ids.len()
    );

    Ok(Json(DeleteResponse::new()))
}

/// PUT /api/sprints/:id/add-task/:task_id
///
/// Assign a task to a sprint and remove it from the backlog. Adding a
/// task the sprint already holds is refused.
pub async fn add_task_to_sprint(
    State(state): State<AppState>,
    Path((id, task_id)): Path<(String, String)>,
) -> ApiResult<Json<SprintResponse>> {
    let sprint_id = Uuid::parse_str(&id)?;
    let task_id = Uuid::parse_str(&task_id)?;

    // 1. Both sides must exist
    let task_repo = TaskRepository::new(state.pool.clone());
    task_repo
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))?;

    let repo = SprintRepository::new(state.pool.clone());
    repo.find_by_id(sprint_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Sprint {} not found", id)))?;

    // 2. Duplicate membership in this sprint is refused
    if repo.contains_task(sprint_id, task_id).await? {
        return Err(ApiError::conflict("Task is already assigned to this sprint"));
    }

    // 3. Assign, then drop the backlog reference
    repo.add_task(sprint_id, task_id).await?;

    let backlog_repo = BacklogRepository::new(state.pool.clone());
    backlog_repo.remove_task(task_id).await?;

    log::info!("Assigned task {} to sprint {}", task_id, sprint_id);

    // 4. Return the updated sprint with members resolved
    let sprint = repo
        .find_by_id(sprint_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Sprint {} not found", id)))?;
    let tasks = repo.find_tasks(sprint_id).await?;

    Ok(Json(SprintResponse {
        success: true,
        data: SprintDto::new(sprint, tasks),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

/// Convert an epoch-seconds field to a timestamp, recording a field
/// error when the value is missing or out of range.
fn parse_date_field(
    value: Option<i64>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<DateTime<Utc>> {
    match value {
        Some(ts) => match DateTime::from_timestamp(ts, 0) {
            Some(date) => Some(date),
            None => {
                errors.push(FieldError::new(
                    field,
                    format!("{} is not a valid timestamp: {}", field, ts),
                ));
                None
            }
        },
        None => {
            errors.push(FieldError::new(field, format!("{} is required", field)));
            None
        }
    }
}

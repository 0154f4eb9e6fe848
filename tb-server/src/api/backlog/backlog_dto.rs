use crate::TaskDto;

use tb_core::{Backlog, Task};

use serde::Serialize;

/// Backlog DTO for JSON serialization, member tasks resolved in order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogDto {
    pub id: String,
    pub tasks: Vec<TaskDto>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl BacklogDto {
    pub fn new(backlog: Backlog, tasks: Vec<Task>) -> Self {
        Self {
            id: backlog.id.to_string(),
            tasks: tasks.into_iter().map(TaskDto::from).collect(),
            created_at: backlog.created_at.timestamp(),
            updated_at: backlog.updated_at.timestamp(),
        }
    }
}

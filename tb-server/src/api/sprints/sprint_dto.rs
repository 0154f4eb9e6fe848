use crate::TaskDto;

use tb_core::{Sprint, Task};

use serde::Serialize;

/// Sprint DTO for JSON serialization.
///
/// The wire shape embeds the resolved member tasks in assignment
/// order rather than bare task ids.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintDto {
    pub id: String,
    pub name: String,
    pub start_date: i64,
    pub end_date: i64,
    pub color: String,
    pub tasks: Vec<TaskDto>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl SprintDto {
    pub fn new(sprint: Sprint, tasks: Vec<Task>) -> Self {
        Self {
            id: sprint.id.to_string(),
            name: sprint.name,
            start_date: sprint.start_date.timestamp(),
            end_date: sprint.end_date.timestamp(),
            color: sprint.color,
            tasks: tasks.into_iter().map(TaskDto::from).collect(),
            created_at: sprint.created_at.timestamp(),
            updated_at: sprint.updated_at.timestamp(),
        }
    }
}

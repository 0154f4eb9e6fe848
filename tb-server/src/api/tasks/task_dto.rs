use tb_core::Task;

use serde::Serialize;

/// Task DTO for JSON serialization (camelCase to match the board UI)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub due_date: i64,
    pub color: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            id: t.id.to_string(),
            title: t.title,
            description: t.description,
            status: t.status.as_str().to_string(),
            due_date: t.due_date.timestamp(),
            color: t.color,
            created_at: t.created_at.timestamp(),
            updated_at: t.updated_at.timestamp(),
        }
    }
}

use serde::Deserialize;

/// Request body for updating a task (every field optional)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Task status: "pending", "in-progress", or "done"
    #[serde(default)]
    pub status: Option<String>,

    /// Unix timestamp (seconds since epoch)
    #[serde(default)]
    pub due_date: Option<i64>,

    #[serde(default)]
    pub color: Option<String>,
}

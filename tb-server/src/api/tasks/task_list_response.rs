use crate::TaskDto;

use serde::Serialize;

/// Envelope for a list of tasks
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<TaskDto>,
}

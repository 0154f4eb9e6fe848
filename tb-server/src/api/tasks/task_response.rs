use crate::TaskDto;

use serde::Serialize;

/// Envelope for a single task
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub success: bool,
    pub data: TaskDto,
}

use crate::SprintDto;

use serde::Serialize;

/// Envelope for a list of sprints
#[derive(Debug, Serialize)]
pub struct SprintListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<SprintDto>,
}

use crate::SprintDto;

use serde::Serialize;

/// Envelope for a single sprint
#[derive(Debug, Serialize)]
pub struct SprintResponse {
    pub success: bool,
    pub data: SprintDto,
}

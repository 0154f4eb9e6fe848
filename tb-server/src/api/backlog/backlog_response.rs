use crate::BacklogDto;

use serde::Serialize;

/// Envelope for the backlog singleton
#[derive(Debug, Serialize)]
pub struct BacklogResponse {
    pub success: bool,
    pub data: BacklogDto,
}

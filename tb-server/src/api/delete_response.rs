use serde::Serialize;

/// Envelope for successful deletions: `{"success": true, "data": {}}`
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub data: EmptyData,
}

impl DeleteResponse {
    pub fn new() -> Self {
        Self {
            success: true,
            data: EmptyData {},
        }
    }
}

impl Default for DeleteResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes as an empty JSON object
#[derive(Debug, Serialize)]
pub struct EmptyData {}

use serde::Deserialize;

/// Request body for creating a sprint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSprintRequest {
    #[serde(default)]
    pub name: Option<String>,

    /// Unix timestamp (seconds since epoch)
    #[serde(default)]
    pub start_date: Option<i64>,

    /// Unix timestamp (seconds since epoch)
    #[serde(default)]
    pub end_date: Option<i64>,

    #[serde(default)]
    pub color: Option<String>,
}

use serde::Deserialize;

/// Request body for updating a sprint (every field optional)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSprintRequest {
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

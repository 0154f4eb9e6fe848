use serde::Deserialize;

/// Query parameters for listing tasks
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    /// Filter to one status: "pending", "in-progress", or "done".
    /// Values outside the enum are ignored (no filter).
    pub status: Option<String>,

    /// When "true", sort ascending by due date.
    #[serde(rename = "sortByDueDate")]
    pub sort_by_due_date: Option<String>,
}

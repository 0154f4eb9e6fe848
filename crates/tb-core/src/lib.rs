pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::backlog::{BACKLOG_ID, Backlog};
pub use models::sprint::Sprint;
pub use models::task::Task;
pub use models::task_status::TaskStatus;

/// Default UI color for freshly created tasks.
pub const DEFAULT_TASK_COLOR: &str = "#4A90E2";

/// Default UI color for freshly created sprints.
pub const DEFAULT_SPRINT_COLOR: &str = "#F5A623";

pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::backlog_repository::BacklogRepository;
pub use repositories::sprint_repository::SprintRepository;
pub use repositories::task_repository::TaskRepository;

pub mod backlog;
pub mod sprint;
pub mod task;
pub mod task_status;

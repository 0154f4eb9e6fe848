pub mod backlog_repository;
pub mod sprint_repository;
pub mod task_repository;

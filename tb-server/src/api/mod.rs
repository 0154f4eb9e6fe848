pub mod backlog;
pub mod delete_response;
pub mod error;
pub mod sprints;
pub mod tasks;

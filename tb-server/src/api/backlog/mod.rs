#[allow(clippy::module_inception)]
pub mod backlog;
pub mod backlog_dto;
pub mod backlog_response;

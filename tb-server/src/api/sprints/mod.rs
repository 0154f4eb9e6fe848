pub mod create_sprint_request;
pub mod sprint_dto;
pub mod sprint_list_response;
pub mod sprint_response;
#[allow(clippy::module_inception)]
pub mod sprints;
pub mod update_sprint_request;

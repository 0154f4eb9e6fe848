pub mod create_task_request;
pub mod list_tasks_query;
pub mod task_dto;
pub mod task_list_response;
pub mod task_response;
#[allow(clippy::module_inception)]
pub mod tasks;
pub mod update_task_request;

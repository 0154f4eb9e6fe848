pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    backlog::{
        backlog::{add_task_to_backlog, create_backlog, get_backlog},
        backlog_dto::BacklogDto,
        backlog_response::BacklogResponse,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::FieldError,
    error::Result as ApiResult,
    sprints::{
        create_sprint_request::CreateSprintRequest,
        sprint_dto::SprintDto,
        sprint_list_response::SprintListResponse,
        sprint_response::SprintResponse,
        sprints::{
            add_task_to_sprint, create_sprint, delete_sprint, get_sprint, list_sprints,
            update_sprint,
        },
        update_sprint_request::UpdateSprintRequest,
    },
    tasks::{
        create_task_request::CreateTaskRequest,
        list_tasks_query::ListTasksQuery,
        task_dto::TaskDto,
        task_list_response::TaskListResponse,
        task_response::TaskResponse,
        tasks::{create_task, delete_task, get_task, list_tasks, update_task},
        update_task_request::UpdateTaskRequest,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;

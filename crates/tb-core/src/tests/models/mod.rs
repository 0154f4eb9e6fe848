mod backlog;
mod sprint;
mod task;
mod task_status;

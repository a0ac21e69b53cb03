mod api_ext;
mod database_ext;
mod task;
mod task_create_params;
mod task_priority;
mod task_store;
mod task_update_params;
mod tasks_list_params;

pub use self::{
    task::Task, task_create_params::TaskCreateParams, task_priority::TaskPriority,
    task_store::TaskStore, task_update_params::TaskUpdateParams,
    tasks_list_params::TasksListParams,
};

pub mod status_get;
pub mod tasks_create;
pub mod tasks_get;
pub mod tasks_list;
pub mod tasks_remove;
pub mod tasks_update;
pub mod users_create;
pub mod users_get;

use crate::{
    server::{SchedulerStatus, Status},
    tasks::{Task, TaskCreateParams, TaskPriority, TaskUpdateParams},
    users::{User, UserCreateParams},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Taskping"),
    paths(
        status_get::status_get,
        tasks_list::tasks_list,
        tasks_get::tasks_get,
        tasks_create::tasks_create,
        tasks_update::tasks_update,
        tasks_remove::tasks_remove,
        users_create::users_create,
        users_get::users_get
    ),
    components(schemas(
        SchedulerStatus,
        Status,
        Task,
        TaskCreateParams,
        TaskPriority,
        TaskUpdateParams,
        User,
        UserCreateParams
    ))
)]
pub(super) struct TaskpingOpenApi;

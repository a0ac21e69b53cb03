use crate::{
    error::Error as TaskpingError,
    server::ServerState,
    tasks::{Task, TasksListParams},
};
use actix_web::{get, web, HttpResponse};
use tracing::error;

/// Gets a list of tasks, optionally filtered by the owner.
#[utoipa::path(
    tags = ["tasks"],
    params(TasksListParams),
    responses(
        (status = 200, description = "A list of tasks.", body = [Task])
    )
)]
#[get("/api/tasks")]
pub async fn tasks_list(
    state: web::Data<ServerState>,
    params: web::Query<TasksListParams>,
) -> Result<HttpResponse, TaskpingError> {
    match state.api.tasks().get_tasks(params.into_inner()).await {
        Ok(tasks) => Ok(HttpResponse::Ok().json(tasks)),
        Err(err) => {
            error!("Failed to retrieve tasks: {err:?}");
            Err(err.into())
        }
    }
}

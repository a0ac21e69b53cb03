use crate::{error::Error as TaskpingError, server::ServerState, tasks::Task};
use actix_web::{get, web, HttpResponse};
use tracing::error;
use uuid::Uuid;

/// Gets a task with the specified ID.
#[utoipa::path(
    tags = ["tasks"],
    params(
        ("task_id" = Uuid, Path, description = "A unique task ID."),
    ),
    responses(
        (status = 200, description = "Task with the specified ID.", body = Task),
        (status = NOT_FOUND, description = "Task with the specified ID was not found.")
    )
)]
#[get("/api/tasks/{task_id}")]
pub async fn tasks_get(
    state: web::Data<ServerState>,
    task_id: web::Path<Uuid>,
) -> Result<HttpResponse, TaskpingError> {
    match state.api.tasks().get_task(*task_id).await {
        Ok(Some(task)) => Ok(HttpResponse::Ok().json(task)),
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(err) => {
            error!("Failed to retrieve task: {err:?}");
            Err(err.into())
        }
    }
}

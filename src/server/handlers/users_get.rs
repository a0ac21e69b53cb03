use crate::{error::Error as TaskpingError, server::ServerState, users::User};
use actix_web::{get, web, HttpResponse};
use tracing::error;
use uuid::Uuid;

/// Gets a user with the specified ID.
#[utoipa::path(
    tags = ["users"],
    params(
        ("user_id" = Uuid, Path, description = "A unique user ID."),
    ),
    responses(
        (status = 200, description = "User with the specified ID.", body = User),
        (status = NOT_FOUND, description = "User with the specified ID was not found.")
    )
)]
#[get("/api/users/{user_id}")]
pub async fn users_get(
    state: web::Data<ServerState>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse, TaskpingError> {
    match state.api.users().get_user(*user_id).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(user)),
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(err) => {
            error!("Failed to retrieve user: {err:?}");
            Err(err.into())
        }
    }
}

use crate::{
    error::Error as TaskpingError,
    server::ServerState,
    tasks::{Task, TaskUpdateParams},
};
use actix_web::{put, web, HttpResponse};
use tracing::error;
use uuid::Uuid;

/// Updates a task with the specified parameters.
#[utoipa::path(
    tags = ["tasks"],
    request_body = TaskUpdateParams,
    params(
        ("task_id" = Uuid, Path, description = "A unique task ID."),
    ),
    responses(
        (status = 200, description = "Task was successfully updated.", body = Task),
        (status = BAD_REQUEST, description = "Cannot update a task with the specified properties.")
    )
)]
#[put("/api/tasks/{task_id}")]
pub async fn tasks_update(
    state: web::Data<ServerState>,
    task_id: web::Path<Uuid>,
    params: web::Json<TaskUpdateParams>,
) -> Result<HttpResponse, TaskpingError> {
    match state
        .api
        .tasks()
        .update_task(*task_id, params.into_inner())
        .await
    {
        Ok(task) => Ok(HttpResponse::Ok().json(task)),
        Err(err) => {
            error!("Failed to update task: {err:?}");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        server::{handlers::tasks_update::tasks_update, server_state::tests::mock_server_state},
        tasks::Task,
        tests::{mock_task, mock_user, MockNotificationChannel, MockTaskStore},
    };
    use actix_web::{
        body::MessageBody,
        http::Method,
        test::{call_service, init_service, TestRequest},
        web, App,
    };
    use serde_json::json;
    use std::sync::Arc;
    use uuid::uuid;

    #[tokio::test]
    async fn can_update_task() -> anyhow::Result<()> {
        let store = Arc::new(MockTaskStore::new());
        let server_state = web::Data::new(
            mock_server_state(store.clone(), Arc::new(MockNotificationChannel::new())).await?,
        );
        let app = init_service(
            App::new()
                .app_data(server_state.clone())
                .service(tasks_update),
        )
        .await;

        let user = mock_user(Some("dev@taskping.dev"));
        store.add_user(user.clone());
        let task = mock_task(user.id, None);
        store.add_task(task.clone());

        let response = call_service(
            &app,
            TestRequest::with_uri(&format!("https://taskping.dev/api/tasks/{}", task.id))
                .method(Method::PUT)
                .set_json(json!({ "title": "Buy oat milk", "completed": true }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 200);

        let updated: Task =
            serde_json::from_slice(&response.into_body().try_into_bytes().unwrap())?;
        assert_eq!(updated.title, "Buy oat milk");
        assert!(updated.completed);

        Ok(())
    }

    #[tokio::test]
    async fn fails_with_bad_request_for_unknown_task() -> anyhow::Result<()> {
        let server_state = web::Data::new(
            mock_server_state(
                Arc::new(MockTaskStore::new()),
                Arc::new(MockNotificationChannel::new()),
            )
            .await?,
        );
        let app = init_service(
            App::new()
                .app_data(server_state.clone())
                .service(tasks_update),
        )
        .await;

        let response = call_service(
            &app,
            TestRequest::with_uri(&format!(
                "https://taskping.dev/api/tasks/{}",
                uuid!("00000000-0000-0000-0000-000000000001")
            ))
            .method(Method::PUT)
            .set_json(json!({ "title": "Buy oat milk" }))
            .to_request(),
        )
        .await;
        assert_eq!(response.status(), 400);

        Ok(())
    }
}

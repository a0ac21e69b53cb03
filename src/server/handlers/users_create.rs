use crate::{
    error::Error as TaskpingError,
    server::ServerState,
    users::{User, UserCreateParams},
};
use actix_web::{post, web, HttpResponse};
use tracing::error;

/// Creates a new user with the specified parameters.
#[utoipa::path(
    tags = ["users"],
    request_body = UserCreateParams,
    responses(
        (status = 201, description = "User was successfully created.", body = User),
        (status = BAD_REQUEST, description = "Cannot create a user with the specified properties.")
    )
)]
#[post("/api/users")]
pub async fn users_create(
    state: web::Data<ServerState>,
    params: web::Json<UserCreateParams>,
) -> Result<HttpResponse, TaskpingError> {
    match state.api.users().create_user(params.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Created().json(user)),
        Err(err) => {
            error!("Failed to create user: {err:?}");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        server::{handlers::users_create::users_create, server_state::tests::mock_server_state},
        tests::{MockNotificationChannel, MockTaskStore},
        users::User,
    };
    use actix_web::{
        body::MessageBody,
        http::Method,
        test::{call_service, init_service, TestRequest},
        web, App,
    };
    use serde_json::json;
    use std::{str::from_utf8, sync::Arc};

    #[tokio::test]
    async fn can_create_user() -> anyhow::Result<()> {
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
                .service(users_create),
        )
        .await;

        let response = call_service(
            &app,
            TestRequest::with_uri("https://taskping.dev/api/users")
                .method(Method::POST)
                .set_json(json!({ "email": "dev@taskping.dev" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 201);

        let user: User = serde_json::from_slice(&response.into_body().try_into_bytes().unwrap())?;
        assert_eq!(user.email, Some("dev@taskping.dev".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn fails_with_bad_request_for_invalid_email() -> anyhow::Result<()> {
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
                .service(users_create),
        )
        .await;

        let response = call_service(
            &app,
            TestRequest::with_uri("https://taskping.dev/api/users")
                .method(Method::POST)
                .set_json(json!({ "email": "not-an-email" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), 400);
        assert_eq!(
            from_utf8(&response.into_body().try_into_bytes().unwrap())?,
            "Cannot parse user email address: not-an-email."
        );

        Ok(())
    }
}

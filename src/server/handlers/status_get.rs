use crate::{
    error::Error as TaskpingError,
    server::{ServerState, Status},
};
use actix_web::{get, web, HttpResponse};

/// Gets server status.
#[utoipa::path(
    tags = ["platform"],
    responses(
        (status = 200, body = Status)
    )
)]
#[get("/api/status")]
pub async fn status_get(state: web::Data<ServerState>) -> Result<HttpResponse, TaskpingError> {
    Ok(HttpResponse::Ok().json(state.status().await))
}

#[cfg(test)]
mod tests {
    use crate::{
        server::{handlers::status_get::status_get, server_state::tests::mock_server_state},
        tests::{MockNotificationChannel, MockTaskStore},
    };
    use actix_web::{
        body::MessageBody,
        test::{call_service, init_service, TestRequest},
        web, App,
    };
    use std::{str::from_utf8, sync::Arc};

    #[tokio::test]
    async fn can_return_status() -> anyhow::Result<()> {
        let server_state = mock_server_state(
            Arc::new(MockTaskStore::new()),
            Arc::new(MockNotificationChannel::new()),
        )
        .await?;
        let app = init_service(
            App::new()
                .app_data(web::Data::new(server_state))
                .service(status_get),
        )
        .await;

        let response = call_service(
            &app,
            TestRequest::with_uri("https://taskping.dev/api/status").to_request(),
        )
        .await;
        assert_eq!(response.status(), 200);

        let body = response.into_body().try_into_bytes().unwrap();
        assert!(from_utf8(&body)?.starts_with(r#"{"version":"0.1.0""#));

        Ok(())
    }
}

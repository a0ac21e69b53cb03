mod handlers;
mod server_state;

use crate::{
    api::Api,
    config::{Config, RawConfig, SmtpConfig},
    database::Database,
    network::{Smtp, SmtpTransport},
    scheduler::Scheduler,
    server::handlers::TaskpingOpenApi,
};
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use lettre::{message::Mailbox, transport::smtp::authentication::Credentials};
use sqlx::postgres::PgPoolOptions;
use std::{str::FromStr, sync::Arc};
use tracing::info;
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

pub use server_state::{SchedulerStatus, ServerState, Status};

pub async fn run(raw_config: RawConfig) -> Result<(), anyhow::Error> {
    let database = Database::create(
        PgPoolOptions::new()
            .max_connections(raw_config.db.max_connections)
            .connect(&Database::connection_url(&raw_config.db))
            .await?,
    )
    .await?;

    let (smtp_transport, smtp_config) = if let Some(ref smtp_config) = raw_config.smtp {
        if let Some(ref catch_all_config) = smtp_config.catch_all {
            Mailbox::from_str(catch_all_config.recipient.as_str())
                .context("Cannot parse SMTP catch-all recipient.")?;
        }

        (
            SmtpTransport::relay(&smtp_config.address)?
                .credentials(Credentials::new(
                    smtp_config.username.clone(),
                    smtp_config.password.clone(),
                ))
                .build(),
            smtp_config.clone(),
        )
    } else {
        (
            SmtpTransport::unencrypted_localhost(),
            SmtpConfig::default(),
        )
    };

    let http_port = raw_config.port;
    let api = Arc::new(Api::new(
        Config::from(raw_config),
        Arc::new(database),
        Arc::new(Smtp::new(smtp_transport, smtp_config)),
    ));

    let scheduler = Scheduler::start(api.clone()).await?;
    let state = web::Data::new(ServerState::new(api, scheduler));
    let app_state = state.clone();
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compat::new(TracingLogger::default()))
            .wrap(middleware::Compat::new(middleware::Compress::default()))
            .wrap(middleware::NormalizePath::trim())
            .app_data(app_state.clone())
            .service(RapiDoc::with_openapi(
                "/api-docs/openapi.json",
                TaskpingOpenApi::openapi(),
            ))
            .service(handlers::status_get::status_get)
            .service(handlers::tasks_list::tasks_list)
            .service(handlers::tasks_get::tasks_get)
            .service(handlers::tasks_create::tasks_create)
            .service(handlers::tasks_update::tasks_update)
            .service(handlers::tasks_remove::tasks_remove)
            .service(handlers::users_create::users_create)
            .service(handlers::users_get::users_get)
            .wrap(Cors::permissive())
    });

    let http_server_url = format!("0.0.0.0:{}", http_port);
    let http_server = http_server
        .bind(&http_server_url)
        .with_context(|| format!("Failed to bind to {http_server_url}."))?;

    info!("Taskping API server is available at http://{http_server_url}");

    http_server
        .run()
        .await
        .context("Failed to run Taskping API server.")?;

    // Let an in-flight reminders cycle drain before the process exits.
    let shutdown_result = state.scheduler.write().await.shutdown().await;
    shutdown_result
}

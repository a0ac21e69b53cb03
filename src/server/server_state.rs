mod scheduler_status;
mod status;

pub use self::{scheduler_status::SchedulerStatus, status::Status};
use crate::{api::Api, scheduler::Scheduler};
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct ServerState {
    pub api: Arc<Api>,
    pub scheduler: RwLock<Scheduler>,
    /// Version of the API server.
    version: String,
}

impl ServerState {
    pub fn new(api: Arc<Api>, scheduler: Scheduler) -> Self {
        Self {
            api,
            scheduler: RwLock::new(scheduler),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Gets the status of the server.
    pub async fn status(&self) -> Status<'_> {
        Status {
            version: self.version.as_str(),
            scheduler: self.scheduler.write().await.status().await,
        }
    }
}

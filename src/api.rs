use crate::{config::Config, network::NotificationChannel, tasks::TaskStore};
use std::sync::Arc;

/// The server APIs collection, constructed once at startup and shared by the HTTP layer and the
/// scheduler. Holds the task store and notification channel handles behind their seams so both
/// are swappable without touching the dispatcher logic.
pub struct Api {
    pub config: Config,
    pub store: Arc<dyn TaskStore>,
    pub channel: Arc<dyn NotificationChannel>,
}

impl Api {
    /// Instantiates APIs collection with the specified config, task store, and channel.
    pub fn new(
        config: Config,
        store: Arc<dyn TaskStore>,
        channel: Arc<dyn NotificationChannel>,
    ) -> Self {
        Self {
            config,
            store,
            channel,
        }
    }
}

impl AsRef<Api> for Api {
    fn as_ref(&self) -> &Self {
        self
    }
}

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use std::time::Duration;

/// Configuration for the deadline reminders.
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RemindersConfig {
    /// How far ahead of "now" a deadline makes a task a reminder candidate.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub lookahead_window: Duration,
    /// The maximum amount of time to wait for the notification channel to confirm a send before
    /// treating the attempt as failed.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub send_timeout: Duration,
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            lookahead_window: Duration::from_secs(3600),
            send_timeout: Duration::from_secs(30),
        }
    }
}

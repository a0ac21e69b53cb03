use serde::{Deserialize, Serialize};

/// Configuration for the scheduler jobs.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SchedulerJobsConfig {
    /// Indicates whether the scheduler is enabled. If disabled, no reminders are sent, but the
    /// rest of the server remains fully functional.
    pub enabled: bool,
    /// The schedule to use for the `RemindersSend` job.
    pub reminders_send: String,
}

impl Default for SchedulerJobsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            // Check for imminent deadlines every minute.
            reminders_send: "0 * * * * *".to_string(),
        }
    }
}

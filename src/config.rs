mod database_config;
mod raw_config;
mod reminders_config;
mod scheduler_jobs_config;
mod smtp_config;

pub use self::{
    database_config::DatabaseConfig,
    raw_config::RawConfig,
    reminders_config::RemindersConfig,
    scheduler_jobs_config::SchedulerJobsConfig,
    smtp_config::SmtpConfig,
};

/// Main server config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Database configuration.
    #[allow(dead_code)]
    pub db: DatabaseConfig,
    /// Configuration for the SMTP functionality.
    #[allow(dead_code)]
    pub smtp: Option<SmtpConfig>,
    /// Configuration for the scheduler jobs.
    pub scheduler: SchedulerJobsConfig,
    /// Configuration for the deadline reminders.
    pub reminders: RemindersConfig,
}

impl AsRef<Config> for Config {
    fn as_ref(&self) -> &Config {
        self
    }
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            db: raw_config.db,
            smtp: raw_config.smtp,
            scheduler: raw_config.scheduler,
            reminders: raw_config.reminders,
        }
    }
}

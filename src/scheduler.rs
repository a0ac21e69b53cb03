mod cron_ext;
mod scheduler_jobs;

use crate::{api::Api, server::SchedulerStatus};
use anyhow::Context;
use scheduler_jobs::RemindersSendJob;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::JobScheduler;
use tracing::{error, warn};

pub use self::cron_ext::CronExt;

/// Defines a scheduler that is responsible for running [`RemindersSendJob`] on a regular interval.
pub struct Scheduler {
    pub inner_scheduler: JobScheduler,
    pub api: Arc<Api>,
    /// Held by a running reminders cycle. Overlapping ticks are skipped, and shutdown waits on
    /// this guard to let an in-flight cycle drain.
    pub(crate) cycle_guard: Arc<Mutex<()>>,
}

impl Scheduler {
    /// Starts the scheduler resuming existing jobs or creating new ones if needed.
    pub async fn start(api: Arc<Api>) -> anyhow::Result<Self> {
        let cycle_guard = Arc::new(Mutex::new(()));
        let scheduler = Self {
            inner_scheduler: JobScheduler::new_with_channel_size(10)
                .await
                .context("Cannot initialize scheduler")?,
            api,
            cycle_guard,
        };

        if scheduler.api.config.scheduler.enabled {
            scheduler
                .inner_scheduler
                .add(RemindersSendJob::create(
                    scheduler.api.clone(),
                    scheduler.cycle_guard.clone(),
                )?)
                .await?;
        } else {
            warn!("Scheduler jobs are disabled, reminders will not be dispatched.");
        }

        scheduler
            .inner_scheduler
            .start()
            .await
            .context("Cannot start scheduler")?;

        Ok(scheduler)
    }

    /// Returns the status of the scheduler.
    pub async fn status(&mut self) -> SchedulerStatus {
        let time_till_next_job = match self.inner_scheduler.time_till_next_job().await {
            Ok(time_till_next_job) => time_till_next_job,
            Err(err) => {
                error!("Failed to get scheduler status: {err:?}");
                return SchedulerStatus {
                    operational: false,
                    time_till_next_job: None,
                };
            }
        };

        SchedulerStatus {
            operational: true,
            time_till_next_job,
        }
    }

    /// Stops accepting new job ticks, then waits for an in-flight reminders cycle, if any, to
    /// complete before returning.
    pub async fn shutdown(&mut self) -> anyhow::Result<()> {
        self.inner_scheduler
            .shutdown()
            .await
            .context("Cannot shutdown scheduler")?;
        let _ = self.cycle_guard.lock().await;
        Ok(())
    }
}

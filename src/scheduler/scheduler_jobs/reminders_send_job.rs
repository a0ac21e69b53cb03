use crate::{api::Api, scheduler::CronExt};
use anyhow::Context;
use croner::Cron;
use std::{sync::Arc, time::Instant};
use tokio::sync::Mutex;
use tokio_cron_scheduler::Job;
use tracing::{debug, error, info, trace};

/// The job run on a regular interval to dispatch reminders for tasks with imminent deadlines.
pub(crate) struct RemindersSendJob;
impl RemindersSendJob {
    /// Creates a new `RemindersSendJob` job.
    pub fn create(api: Arc<Api>, cycle_guard: Arc<Mutex<()>>) -> anyhow::Result<Job> {
        let job = Job::new_async(
            Cron::parse_pattern(&api.config.scheduler.reminders_send)
                .with_context(|| {
                    format!(
                        "Cannot parse `reminders_send` schedule: {}",
                        api.config.scheduler.reminders_send
                    )
                })?
                .pattern
                .to_string(),
            move |_, _| {
                let api = api.clone();
                let cycle_guard = cycle_guard.clone();
                Box::pin(async move {
                    Self::execute(api, cycle_guard).await;
                })
            },
        )?;

        Ok(job)
    }

    /// Executes a `RemindersSendJob` job.
    async fn execute(api: Arc<Api>, cycle_guard: Arc<Mutex<()>>) {
        // If the previous cycle is still running, skip this tick entirely instead of queueing
        // a second concurrent cycle.
        let Ok(_guard) = cycle_guard.try_lock() else {
            debug!("Previous reminders cycle is still in progress, skipping tick.");
            return;
        };

        let execute_start = Instant::now();
        match api.reminders().send_due_reminders().await {
            Ok(stats) if stats.candidates > 0 => {
                info!(
                    "Processed {} reminder candidates, sent {}, skipped {}, failed {} ({} elapsed).",
                    stats.candidates,
                    stats.sent,
                    stats.skipped,
                    stats.failed,
                    humantime::format_duration(execute_start.elapsed())
                );
            }
            Ok(_) => {
                trace!(
                    "No reminder candidates to process ({} elapsed).",
                    humantime::format_duration(execute_start.elapsed())
                );
            }
            Err(err) => {
                error!(
                    "Failed to run reminders cycle ({} elapsed): {err:?}",
                    humantime::format_duration(execute_start.elapsed())
                );
            }
        }
    }
}

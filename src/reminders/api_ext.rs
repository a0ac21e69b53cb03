use crate::{api::Api, reminders::ReminderMessage, tasks::Task};
use anyhow::{bail, Context};
use time::OffsetDateTime;
use tracing::{debug, error, info, warn};

/// Counters describing a single reminders cycle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ReminderCycleStats {
    /// Number of candidate tasks selected for this cycle.
    pub candidates: usize,
    /// Number of reminders successfully sent and committed.
    pub sent: usize,
    /// Number of candidates permanently skipped (e.g. no delivery address).
    pub skipped: usize,
    /// Number of candidates that failed transiently and remain candidates for the next cycle.
    pub failed: usize,
}

/// The outcome of dispatching a reminder for a single candidate task.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum DispatchOutcome {
    /// The reminder was sent and the task was durably marked as notified.
    Sent,
    /// The task was permanently skipped and flagged for operator attention.
    Skipped,
    /// The task was completed or removed while the cycle was holding it as a candidate, the
    /// write-back turned into a no-op.
    Superseded,
}

/// Describes the API to dispatch deadline reminders.
pub struct RemindersApiExt<'a> {
    api: &'a Api,
}

impl<'a> RemindersApiExt<'a> {
    /// Creates Reminders API.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Runs a single reminders cycle: selects all tasks whose deadline falls within the lookahead
    /// window and dispatches a one-time notification for each of them. An error for one task
    /// never prevents the remaining candidates from being processed; a storage error during
    /// selection aborts only this cycle.
    pub async fn send_due_reminders(&self) -> anyhow::Result<ReminderCycleStats> {
        let now = OffsetDateTime::now_utc();
        let window = self.api.config.reminders.lookahead_window;

        let candidates = self
            .api
            .store
            .get_reminder_candidates(now, window)
            .await
            .context("Failed to select reminder candidates")?;

        let mut stats = ReminderCycleStats {
            candidates: candidates.len(),
            ..Default::default()
        };

        for task in candidates {
            let task_id = task.id;
            match self.dispatch_reminder(&task, now).await {
                Ok(DispatchOutcome::Sent) => stats.sent += 1,
                Ok(DispatchOutcome::Skipped) => stats.skipped += 1,
                Ok(DispatchOutcome::Superseded) => {
                    debug!(task.id = %task_id, "Task changed mid-cycle, reminder write-back skipped.");
                }
                Err(err) => {
                    error!(task.id = %task_id, "Failed to dispatch reminder: {err:?}");
                    stats.failed += 1;
                }
            }
        }

        info!(
            metrics.reminder_candidates = stats.candidates,
            metrics.reminders_sent = stats.sent,
            metrics.reminders_skipped = stats.skipped,
            metrics.reminders_failed = stats.failed,
            "Completed reminders cycle."
        );

        Ok(stats)
    }

    /// Dispatches a reminder for a single candidate task: resolves the delivery address, sends
    /// the notification bounded by the configured timeout, and only on confirmed success commits
    /// the "already notified" marker with a targeted conditional update.
    async fn dispatch_reminder(
        &self,
        task: &Task,
        now: OffsetDateTime,
    ) -> anyhow::Result<DispatchOutcome> {
        // The notified-at stamp is the authoritative duplicate suppressor, even if the armed
        // flag was left inconsistent by a crash between send and commit.
        if task.notified_at.is_some() {
            debug!(task.id = %task.id, "Task is already notified, skipping.");
            return Ok(DispatchOutcome::Superseded);
        }

        let Some(address) = self.api.store.get_delivery_address(task.owner_id).await? else {
            // The condition cannot self-heal without an external update, so the task is flagged
            // for operator attention rather than retried every tick.
            warn!(
                task.id = %task.id, user.id = %task.owner_id,
                "No delivery address for the task owner, flagging the task for attention."
            );
            self.api.store.flag_task_needs_attention(task.id).await?;
            return Ok(DispatchOutcome::Skipped);
        };

        let text = ReminderMessage::for_task(task)?.render()?;

        let send_timeout = self.api.config.reminders.send_timeout;
        match tokio::time::timeout(send_timeout, self.api.channel.send(&address, &text)).await {
            Ok(Ok(())) => {}
            // Transient failure: no state is mutated, the task remains a candidate and the next
            // tick will retry (at-least-once delivery).
            Ok(Err(err)) => return Err(err.context("Notification channel reported failure")),
            Err(_) => bail!(
                "Notification channel did not respond within {}.",
                humantime::format_duration(send_timeout)
            ),
        }

        if self.api.store.mark_task_notified(task.id, now).await? {
            debug!(task.id = %task.id, "Successfully sent reminder.");
            Ok(DispatchOutcome::Sent)
        } else {
            // The task was completed or removed between selection and the write-back; the
            // conditional update is a no-op and must not resurrect the task.
            Ok(DispatchOutcome::Superseded)
        }
    }
}

impl Api {
    /// Returns an API to dispatch deadline reminders.
    pub fn reminders(&self) -> RemindersApiExt<'_> {
        RemindersApiExt::new(self)
    }

    /// Used by tests to dispatch a reminder for a potentially stale candidate.
    #[cfg(test)]
    pub(crate) async fn dispatch_reminder_for_tests(&self, task: &Task) -> anyhow::Result<bool> {
        let reminders = RemindersApiExt::new(self);
        Ok(reminders.dispatch_reminder(task, OffsetDateTime::now_utc()).await?
            == DispatchOutcome::Sent)
    }
}

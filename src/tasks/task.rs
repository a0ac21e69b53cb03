use crate::tasks::TaskPriority;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Defines a tracked task.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique id of the task.
    pub id: Uuid,
    /// Id of the user the task belongs to, used to resolve the reminder delivery address.
    pub owner_id: Uuid,
    /// Arbitrary title of the task.
    pub title: String,
    /// Optional description of the task.
    pub description: Option<String>,
    /// Priority of the task.
    pub priority: TaskPriority,
    /// Absolute deadline of the task, in UTC. Tasks without a deadline never become reminder
    /// candidates.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deadline: Option<OffsetDateTime>,
    /// Indicates that a reminder has not yet been sent for the task's current deadline. Flipped
    /// to `false` once a reminder is sent and stays `false` until the task is re-armed, e.g. by
    /// changing the deadline.
    pub reminder_armed: bool,
    /// Indicates that the task is completed. Completed tasks are never reminder candidates.
    pub completed: bool,
    /// Indicates that the task requires operator attention (e.g. its owner has no delivery
    /// address) and is excluded from candidacy until re-armed.
    pub needs_attention: bool,
    /// The time at which the reminder was actually sent, if it was.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub notified_at: Option<OffsetDateTime>,
    /// The time at which the task was created, in UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// The time at which the task was last updated, in UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Task {
    /// Checks if the task is eligible for a reminder right now: the task is armed, incomplete,
    /// not flagged for attention, not yet notified, and its deadline falls within the lookahead
    /// window `(now, now + window]`. Deadlines that have already passed are deliberately
    /// excluded: a reminder is a look-ahead nudge, not a backlog alert.
    #[allow(dead_code)]
    pub fn is_reminder_candidate(&self, now: OffsetDateTime, window: Duration) -> bool {
        if !self.reminder_armed
            || self.completed
            || self.needs_attention
            || self.notified_at.is_some()
        {
            return false;
        }

        match self.deadline {
            Some(deadline) => deadline > now && deadline <= now + window,
            None => false,
        }
    }
}

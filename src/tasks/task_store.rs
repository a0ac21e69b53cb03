use crate::{tasks::Task, users::User};
use async_trait::async_trait;
use std::time::Duration;
use time::OffsetDateTime;
use uuid::Uuid;

/// The narrow storage contract the task tracker and the reminders dispatcher rely on. The
/// scheduler only ever reads candidates and performs targeted conditional updates; it never
/// creates or deletes tasks.
#[async_trait]
pub trait TaskStore: Send + Sync + 'static {
    /// Retrieves the task with the specified id.
    async fn get_task(&self, id: Uuid) -> anyhow::Result<Option<Task>>;

    /// Retrieves all tasks, optionally filtered by the owner.
    async fn get_tasks(&self, owner_id: Option<Uuid>) -> anyhow::Result<Vec<Task>>;

    /// Inserts a new task.
    async fn insert_task(&self, task: &Task) -> anyhow::Result<()>;

    /// Updates the task, returning whether the task still existed and the update applied.
    async fn update_task(&self, task: &Task) -> anyhow::Result<bool>;

    /// Removes the task with the specified id, returning whether the task existed.
    async fn remove_task(&self, id: Uuid) -> anyhow::Result<bool>;

    /// Retrieves all tasks eligible for a reminder right now: armed, incomplete, not flagged for
    /// attention, not yet notified, with a deadline within `(now, now + window]`.
    async fn get_reminder_candidates(
        &self,
        now: OffsetDateTime,
        window: Duration,
    ) -> anyhow::Result<Vec<Task>>;

    /// Disarms the task's reminder and stamps `notified_at`, conditioned on the task still
    /// existing, being armed, and not completed. Returns whether the update actually applied; a
    /// concurrent completion or removal makes this a no-op, not an error.
    async fn mark_task_notified(
        &self,
        id: Uuid,
        notified_at: OffsetDateTime,
    ) -> anyhow::Result<bool>;

    /// Flags the task as requiring operator attention, excluding it from candidacy until it is
    /// re-armed. Returns whether the update actually applied.
    async fn flag_task_needs_attention(&self, id: Uuid) -> anyhow::Result<bool>;

    /// Retrieves the user with the specified id.
    async fn get_user(&self, id: Uuid) -> anyhow::Result<Option<User>>;

    /// Inserts a new user.
    async fn insert_user(&self, user: &User) -> anyhow::Result<()>;

    /// Resolves the reminder delivery address for the specified owner, if there is one.
    async fn get_delivery_address(&self, owner_id: Uuid) -> anyhow::Result<Option<String>>;
}

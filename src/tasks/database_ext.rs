mod raw_task;

use crate::{database::Database, tasks::Task};
use raw_task::RawTask;
use std::time::Duration;
use time::OffsetDateTime;
use uuid::Uuid;

const TASK_COLUMNS: &str = r#"id, owner_id, title, description, priority, deadline,
reminder_armed, completed, needs_attention, notified_at, created_at, updated_at"#;

/// Extends primary database with the tasks-related methods.
impl Database {
    /// Retrieves task from the database using id.
    pub async fn get_task_row(&self, id: Uuid) -> anyhow::Result<Option<Task>> {
        sqlx::query_as::<_, RawTask>(&format!(
            r#"SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1"#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(Task::try_from)
        .transpose()
    }

    /// Retrieves all tasks from the database, optionally filtered by the owner.
    pub async fn get_task_rows(&self, owner_id: Option<Uuid>) -> anyhow::Result<Vec<Task>> {
        let raw_tasks = if let Some(owner_id) = owner_id {
            sqlx::query_as::<_, RawTask>(&format!(
                r#"SELECT {TASK_COLUMNS} FROM tasks WHERE owner_id = $1 ORDER BY created_at, id"#
            ))
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, RawTask>(&format!(
                r#"SELECT {TASK_COLUMNS} FROM tasks ORDER BY created_at, id"#
            ))
            .fetch_all(&self.pool)
            .await?
        };

        let mut tasks = vec![];
        for raw_task in raw_tasks {
            tasks.push(Task::try_from(raw_task)?);
        }

        Ok(tasks)
    }

    /// Inserts a new task to the database.
    pub async fn insert_task_row(&self, task: &Task) -> anyhow::Result<()> {
        let raw_task = RawTask::try_from(task)?;
        sqlx::query(
            r#"
INSERT INTO tasks (id, owner_id, title, description, priority, deadline, reminder_armed,
                   completed, needs_attention, notified_at, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(raw_task.id)
        .bind(raw_task.owner_id)
        .bind(raw_task.title)
        .bind(raw_task.description)
        .bind(raw_task.priority)
        .bind(raw_task.deadline)
        .bind(raw_task.reminder_armed)
        .bind(raw_task.completed)
        .bind(raw_task.needs_attention)
        .bind(raw_task.notified_at)
        .bind(raw_task.created_at)
        .bind(raw_task.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates task in the database, returning whether the task existed.
    pub async fn update_task_row(&self, task: &Task) -> anyhow::Result<bool> {
        let raw_task = RawTask::try_from(task)?;
        let result = sqlx::query(
            r#"
UPDATE tasks
SET title = $2, description = $3, priority = $4, deadline = $5, reminder_armed = $6,
    completed = $7, needs_attention = $8, notified_at = $9, updated_at = $10
WHERE id = $1
            "#,
        )
        .bind(raw_task.id)
        .bind(raw_task.title)
        .bind(raw_task.description)
        .bind(raw_task.priority)
        .bind(raw_task.deadline)
        .bind(raw_task.reminder_armed)
        .bind(raw_task.completed)
        .bind(raw_task.needs_attention)
        .bind(raw_task.notified_at)
        .bind(raw_task.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Removes task from the database using id, returning whether the task existed.
    pub async fn remove_task_row(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM tasks WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Retrieves all tasks eligible for a reminder right now. The predicate mirrors
    /// `Task::is_reminder_candidate`.
    pub async fn get_reminder_candidate_rows(
        &self,
        now: OffsetDateTime,
        window: Duration,
    ) -> anyhow::Result<Vec<Task>> {
        let raw_tasks = sqlx::query_as::<_, RawTask>(&format!(
            r#"
SELECT {TASK_COLUMNS}
FROM tasks
WHERE reminder_armed = TRUE AND completed = FALSE AND needs_attention = FALSE
  AND notified_at IS NULL AND deadline IS NOT NULL AND deadline > $1 AND deadline <= $2
            "#
        ))
        .bind(now)
        .bind(now + window)
        .fetch_all(&self.pool)
        .await?;

        let mut tasks = vec![];
        for raw_task in raw_tasks {
            tasks.push(Task::try_from(raw_task)?);
        }

        Ok(tasks)
    }

    /// Disarms the task's reminder and stamps `notified_at`, conditioned on the task still being
    /// armed and not completed. Returns whether the update actually applied.
    pub async fn mark_task_row_notified(
        &self,
        id: Uuid,
        notified_at: OffsetDateTime,
    ) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
UPDATE tasks
SET reminder_armed = FALSE, notified_at = $2, updated_at = $2
WHERE id = $1 AND completed = FALSE AND reminder_armed = TRUE
            "#,
        )
        .bind(id)
        .bind(notified_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Flags the task as requiring operator attention. Returns whether the update applied.
    pub async fn flag_task_row_needs_attention(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
UPDATE tasks
SET needs_attention = TRUE
WHERE id = $1 AND completed = FALSE
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

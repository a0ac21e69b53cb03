use crate::tasks::Task;
use anyhow::Context;
use time::{macros::format_description, OffsetDateTime};

/// A fixed-format reminder message for a task with an imminent deadline.
pub struct ReminderMessage<'t> {
    task: &'t Task,
    deadline: OffsetDateTime,
}

impl<'t> ReminderMessage<'t> {
    /// Creates a reminder message for the specified task. Fails if the task has no deadline.
    pub fn for_task(task: &'t Task) -> anyhow::Result<Self> {
        let deadline = task
            .deadline
            .with_context(|| format!("Task ('{}') doesn't have a deadline.", task.id))?;
        Ok(Self { task, deadline })
    }

    /// Renders the message text with the deadline in a stable, human-readable UTC format.
    pub fn render(&self) -> anyhow::Result<String> {
        let deadline = self
            .deadline
            .format(format_description!(
                "[year]-[month]-[day] [hour]:[minute] UTC"
            ))
            .with_context(|| {
                format!("Cannot format deadline of the task ('{}').", self.task.id)
            })?;
        Ok(format!(
            "Reminder: {} (deadline: {deadline})",
            self.task.title
        ))
    }
}

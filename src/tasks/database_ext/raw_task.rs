use crate::tasks::Task;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub(super) struct RawTask {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub deadline: Option<OffsetDateTime>,
    pub reminder_armed: bool,
    pub completed: bool,
    pub needs_attention: bool,
    pub notified_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl TryFrom<RawTask> for Task {
    type Error = anyhow::Error;

    fn try_from(raw: RawTask) -> Result<Self, Self::Error> {
        Ok(Task {
            id: raw.id,
            owner_id: raw.owner_id,
            title: raw.title,
            description: raw.description,
            priority: raw.priority.parse()?,
            deadline: raw.deadline,
            reminder_armed: raw.reminder_armed,
            completed: raw.completed,
            needs_attention: raw.needs_attention,
            notified_at: raw.notified_at,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}

impl TryFrom<&Task> for RawTask {
    type Error = anyhow::Error;

    fn try_from(task: &Task) -> Result<Self, Self::Error> {
        Ok(RawTask {
            id: task.id,
            owner_id: task.owner_id,
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority.to_string(),
            deadline: task.deadline,
            reminder_armed: task.reminder_armed,
            completed: task.completed,
            needs_attention: task.needs_attention,
            notified_at: task.notified_at,
            created_at: task.created_at,
            updated_at: task.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RawTask;
    use crate::{
        tasks::{Task, TaskPriority},
        tests::mock_task,
    };
    use time::macros::datetime;
    use uuid::uuid;

    #[test]
    fn conversion_roundtrip() -> anyhow::Result<()> {
        let task = Task {
            priority: TaskPriority::High,
            ..mock_task(
                uuid!("00000000-0000-0000-0000-000000000001"),
                Some(datetime!(2026-01-01 10:30 UTC)),
            )
        };

        let raw = RawTask::try_from(&task)?;
        assert_eq!(raw.priority, "high");
        assert_eq!(Task::try_from(raw)?, task);

        Ok(())
    }

    #[test]
    fn fails_on_unknown_priority() -> anyhow::Result<()> {
        let task = mock_task(
            uuid!("00000000-0000-0000-0000-000000000001"),
            Some(datetime!(2026-01-01 10:30 UTC)),
        );
        let mut raw = RawTask::try_from(&task)?;
        raw.priority = "urgent".to_string();
        assert!(Task::try_from(raw).is_err());

        Ok(())
    }
}

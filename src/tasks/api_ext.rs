use crate::{
    api::Api,
    error::Error as TaskpingError,
    tasks::{Task, TaskCreateParams, TaskUpdateParams, TasksListParams},
};
use anyhow::bail;
use time::OffsetDateTime;
use uuid::Uuid;

/// Defines the maximum length of a task title.
pub const MAX_TASK_TITLE_LENGTH: usize = 100;

/// Defines the maximum length of a task description.
pub const MAX_TASK_DESCRIPTION_LENGTH: usize = 2000;

/// Describes the API to work with tasks.
pub struct TasksApiExt<'a> {
    api: &'a Api,
}

impl<'a> TasksApiExt<'a> {
    /// Creates Tasks API.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Returns all tasks, optionally filtered by the owner.
    pub async fn get_tasks(&self, params: TasksListParams) -> anyhow::Result<Vec<Task>> {
        self.api.store.get_tasks(params.owner_id).await
    }

    /// Returns task by its id.
    pub async fn get_task(&self, id: Uuid) -> anyhow::Result<Option<Task>> {
        self.api.store.get_task(id).await
    }

    /// Creates a new task with the specified parameters.
    pub async fn create_task(&self, params: TaskCreateParams) -> anyhow::Result<Task> {
        Self::validate_title(&params.title)?;
        Self::validate_description(params.description.as_deref())?;

        if self.api.store.get_user(params.owner_id).await?.is_none() {
            bail!(TaskpingError::client(format!(
                "User ('{}') doesn't exist.",
                params.owner_id
            )));
        }

        let created_at = OffsetDateTime::now_utc();
        let task = Task {
            id: Uuid::now_v7(),
            owner_id: params.owner_id,
            title: params.title,
            description: params.description,
            priority: params.priority,
            deadline: params.deadline,
            reminder_armed: params.reminder,
            completed: false,
            needs_attention: false,
            notified_at: None,
            created_at,
            updated_at: created_at,
        };

        self.api.store.insert_task(&task).await?;

        Ok(task)
    }

    /// Updates an existing task. Changing the deadline, or explicitly requesting a reminder,
    /// re-arms the reminder and clears the notification and attention markers.
    pub async fn update_task(&self, id: Uuid, params: TaskUpdateParams) -> anyhow::Result<Task> {
        let Some(mut task) = self.api.store.get_task(id).await? else {
            bail!(TaskpingError::client(format!(
                "Task ('{id}') doesn't exist."
            )));
        };

        if let Some(title) = params.title {
            Self::validate_title(&title)?;
            task.title = title;
        }

        if let Some(description) = params.description {
            Self::validate_description(Some(&description))?;
            task.description = Some(description);
        }

        if let Some(priority) = params.priority {
            task.priority = priority;
        }

        if let Some(deadline) = params.deadline {
            if task.deadline != Some(deadline) {
                task.deadline = Some(deadline);
                task.reminder_armed = true;
                task.notified_at = None;
                task.needs_attention = false;
            }
        }

        if let Some(reminder) = params.reminder {
            task.reminder_armed = reminder;
            if reminder {
                task.notified_at = None;
                task.needs_attention = false;
            }
        }

        if let Some(completed) = params.completed {
            task.completed = completed;
        }

        task.updated_at = OffsetDateTime::now_utc();

        if !self.api.store.update_task(&task).await? {
            bail!(TaskpingError::client(format!(
                "Task ('{id}') doesn't exist."
            )));
        }

        Ok(task)
    }

    /// Removes the task with the specified id, returning whether the task existed.
    pub async fn remove_task(&self, id: Uuid) -> anyhow::Result<bool> {
        self.api.store.remove_task(id).await
    }

    fn validate_title(title: &str) -> anyhow::Result<()> {
        if title.is_empty() {
            bail!(TaskpingError::client("Task title cannot be empty."));
        }

        if title.len() > MAX_TASK_TITLE_LENGTH {
            bail!(TaskpingError::client(format!(
                "Task title cannot be longer than {MAX_TASK_TITLE_LENGTH} characters."
            )));
        }

        Ok(())
    }

    fn validate_description(description: Option<&str>) -> anyhow::Result<()> {
        if let Some(description) = description {
            if description.len() > MAX_TASK_DESCRIPTION_LENGTH {
                bail!(TaskpingError::client(format!(
                    "Task description cannot be longer than {MAX_TASK_DESCRIPTION_LENGTH} characters."
                )));
            }
        }

        Ok(())
    }
}

impl Api {
    /// Returns an API to work with tasks.
    pub fn tasks(&self) -> TasksApiExt<'_> {
        TasksApiExt::new(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::{Error as TaskpingError, ErrorKind},
        tasks::{TaskCreateParams, TaskPriority, TaskUpdateParams, TasksListParams},
        tests::{mock_api_with_stubs, mock_user, MockNotificationChannel, MockTaskStore},
    };
    use std::sync::Arc;
    use time::macros::datetime;
    use uuid::{uuid, Uuid};

    fn to_client_error(err: anyhow::Error) -> TaskpingError {
        err.downcast::<TaskpingError>().unwrap()
    }

    #[tokio::test]
    async fn can_create_and_retrieve_tasks() -> anyhow::Result<()> {
        let store = Arc::new(MockTaskStore::new());
        let channel = Arc::new(MockNotificationChannel::new());
        let api = mock_api_with_stubs(store.clone(), channel);

        let user = mock_user(Some("dev@taskping.dev"));
        store.add_user(user.clone());

        let task = api
            .tasks()
            .create_task(TaskCreateParams {
                owner_id: user.id,
                title: "Buy milk".to_string(),
                description: None,
                priority: TaskPriority::High,
                deadline: Some(datetime!(2026-01-01 10:00 UTC)),
                reminder: true,
            })
            .await?;

        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.priority, TaskPriority::High);
        assert!(task.reminder_armed);
        assert!(!task.completed);
        assert!(task.notified_at.is_none());

        assert_eq!(api.tasks().get_task(task.id).await?, Some(task.clone()));
        assert_eq!(
            api.tasks().get_tasks(TasksListParams::default()).await?,
            vec![task.clone()]
        );
        assert_eq!(
            api.tasks()
                .get_tasks(TasksListParams {
                    owner_id: Some(user.id)
                })
                .await?,
            vec![task]
        );
        assert!(api
            .tasks()
            .get_tasks(TasksListParams {
                owner_id: Some(uuid!("00000000-0000-0000-0000-000000000009"))
            })
            .await?
            .is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_create_task_with_invalid_params() -> anyhow::Result<()> {
        let store = Arc::new(MockTaskStore::new());
        let channel = Arc::new(MockNotificationChannel::new());
        let api = mock_api_with_stubs(store.clone(), channel);

        let user = mock_user(Some("dev@taskping.dev"));
        store.add_user(user.clone());

        // Empty title.
        let err = api
            .tasks()
            .create_task(TaskCreateParams {
                owner_id: user.id,
                title: "".to_string(),
                description: None,
                priority: TaskPriority::Medium,
                deadline: None,
                reminder: false,
            })
            .await
            .unwrap_err();
        assert_eq!(to_client_error(err).kind, ErrorKind::ClientError);

        // Title too long.
        let err = api
            .tasks()
            .create_task(TaskCreateParams {
                owner_id: user.id,
                title: "a".repeat(101),
                description: None,
                priority: TaskPriority::Medium,
                deadline: None,
                reminder: false,
            })
            .await
            .unwrap_err();
        assert_eq!(to_client_error(err).kind, ErrorKind::ClientError);

        // Unknown owner.
        let err = api
            .tasks()
            .create_task(TaskCreateParams {
                owner_id: Uuid::now_v7(),
                title: "Buy milk".to_string(),
                description: None,
                priority: TaskPriority::Medium,
                deadline: None,
                reminder: false,
            })
            .await
            .unwrap_err();
        assert_eq!(to_client_error(err).kind, ErrorKind::ClientError);

        Ok(())
    }

    #[tokio::test]
    async fn changing_deadline_rearms_reminder() -> anyhow::Result<()> {
        let store = Arc::new(MockTaskStore::new());
        let channel = Arc::new(MockNotificationChannel::new());
        let api = mock_api_with_stubs(store.clone(), channel);

        let user = mock_user(Some("dev@taskping.dev"));
        store.add_user(user.clone());

        let task = api
            .tasks()
            .create_task(TaskCreateParams {
                owner_id: user.id,
                title: "Buy milk".to_string(),
                description: None,
                priority: TaskPriority::Medium,
                deadline: Some(datetime!(2026-01-01 10:00 UTC)),
                reminder: true,
            })
            .await?;

        // Simulate an already-sent reminder.
        assert!(
            store
                .mark_task_notified_sync(task.id, datetime!(2026-01-01 09:30 UTC))
        );

        let updated = api
            .tasks()
            .update_task(
                task.id,
                TaskUpdateParams {
                    deadline: Some(datetime!(2026-01-02 10:00 UTC)),
                    ..Default::default()
                },
            )
            .await?;

        assert!(updated.reminder_armed);
        assert!(updated.notified_at.is_none());
        assert!(!updated.needs_attention);
        assert_eq!(updated.deadline, Some(datetime!(2026-01-02 10:00 UTC)));

        Ok(())
    }

    #[tokio::test]
    async fn can_update_and_remove_tasks() -> anyhow::Result<()> {
        let store = Arc::new(MockTaskStore::new());
        let channel = Arc::new(MockNotificationChannel::new());
        let api = mock_api_with_stubs(store.clone(), channel);

        let user = mock_user(Some("dev@taskping.dev"));
        store.add_user(user.clone());

        let task = api
            .tasks()
            .create_task(TaskCreateParams {
                owner_id: user.id,
                title: "Buy milk".to_string(),
                description: None,
                priority: TaskPriority::Medium,
                deadline: None,
                reminder: false,
            })
            .await?;

        let updated = api
            .tasks()
            .update_task(
                task.id,
                TaskUpdateParams {
                    title: Some("Buy oat milk".to_string()),
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await?;
        assert_eq!(updated.title, "Buy oat milk");
        assert!(updated.completed);

        assert!(api.tasks().remove_task(task.id).await?);
        assert!(!api.tasks().remove_task(task.id).await?);
        assert!(api.tasks().get_task(task.id).await?.is_none());

        // Updating a removed task fails with a client error.
        let err = api
            .tasks()
            .update_task(task.id, TaskUpdateParams::default())
            .await
            .unwrap_err();
        assert_eq!(to_client_error(err).kind, ErrorKind::ClientError);

        Ok(())
    }
}

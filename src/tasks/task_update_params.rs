use crate::tasks::TaskPriority;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Parameters for updating a task. Every field is optional; omitted fields are left unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdateParams {
    /// New title of the task.
    #[schema(min_length = 1, max_length = 100)]
    #[serde(default)]
    pub title: Option<String>,
    /// New description of the task.
    #[serde(default)]
    pub description: Option<String>,
    /// New priority of the task.
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    /// New deadline of the task, in UTC. Changing the deadline re-arms the reminder.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deadline: Option<OffsetDateTime>,
    /// Whether a reminder should be sent ahead of the deadline.
    #[serde(default)]
    pub reminder: Option<bool>,
    /// Whether the task is completed.
    #[serde(default)]
    pub completed: Option<bool>,
}

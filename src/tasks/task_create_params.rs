use crate::tasks::TaskPriority;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Parameters for creating a task.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreateParams {
    /// Id of the user the task belongs to.
    pub owner_id: Uuid,
    /// Arbitrary title of the task.
    #[schema(min_length = 1, max_length = 100)]
    pub title: String,
    /// Optional description of the task.
    #[serde(default)]
    pub description: Option<String>,
    /// Priority of the task.
    #[serde(default)]
    pub priority: TaskPriority,
    /// Absolute deadline of the task, in UTC.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deadline: Option<OffsetDateTime>,
    /// Whether a reminder should be sent ahead of the deadline.
    #[serde(default)]
    pub reminder: bool,
}

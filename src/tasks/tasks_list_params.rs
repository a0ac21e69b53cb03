use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

/// Parameters for listing tasks.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TasksListParams {
    /// Optional owner id to filter tasks by.
    pub owner_id: Option<Uuid>,
}

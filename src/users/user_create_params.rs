use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Parameters for creating a user.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateParams {
    /// Email address reminders are delivered to.
    #[serde(default)]
    pub email: Option<String>,
}

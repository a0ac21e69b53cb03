use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Defines a user owning tasks.
#[derive(Serialize, Deserialize, sqlx::FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique id of the user.
    pub id: Uuid,
    /// Email address reminders are delivered to. Tasks of a user without an email address are
    /// skipped by the reminders dispatcher and flagged for attention.
    pub email: Option<String>,
    /// The time at which the user was created, in UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

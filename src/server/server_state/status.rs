use crate::server::SchedulerStatus;
use serde::Serialize;
use utoipa::ToSchema;

/// Server status.
#[derive(Clone, Serialize, ToSchema)]
pub struct Status<'s> {
    /// Version of the server.
    pub version: &'s str,
    /// Status of the scheduler.
    pub scheduler: SchedulerStatus,
}

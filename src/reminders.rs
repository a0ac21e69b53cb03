mod api_ext;
mod reminder_message;

pub use self::reminder_message::ReminderMessage;
#[allow(unused_imports)] // Consumed by the unit tests only.
pub use self::api_ext::ReminderCycleStats;

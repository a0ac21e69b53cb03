mod reminders_send_job;

pub(crate) use self::reminders_send_job::RemindersSendJob;

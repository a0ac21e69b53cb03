use crate::{config::SmtpConfig, network::NotificationChannel};
use anyhow::{bail, Context};
use async_trait::async_trait;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tokio::{
    sync::Mutex,
    time::{interval, Interval, MissedTickBehavior},
};
use tracing::debug;

/// Type alias for the SMTP transport.
pub type SmtpTransport = AsyncSmtpTransport<Tokio1Executor>;

/// The subject used for all reminder emails.
const REMINDER_EMAIL_SUBJECT: &str = "Task deadline reminder";

/// SMTP-backed notification channel.
pub struct Smtp {
    /// SMTP configuration.
    pub config: SmtpConfig,
    /// The SMTP transport.
    transport: SmtpTransport,
    /// Interval enforcing the minimum delay between two consecutive emails.
    throttle_interval: Mutex<Interval>,
}

impl Smtp {
    /// Creates a new `Smtp` notification channel instance.
    pub fn new(transport: SmtpTransport, config: SmtpConfig) -> Self {
        let mut throttle_interval = interval(config.throttle_delay);
        throttle_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            transport,
            config,
            throttle_interval: Mutex::new(throttle_interval),
        }
    }
}

#[async_trait]
impl NotificationChannel for Smtp {
    async fn send(&self, address: &str, text: &str) -> anyhow::Result<()> {
        // Reroute to the catch-all recipient if the text matches its matcher.
        let recipient = match self.config.catch_all {
            Some(ref catch_all) if catch_all.text_matcher.is_match(text) => {
                catch_all.recipient.as_str()
            }
            _ => address,
        };

        let message = Message::builder()
            .from(self.config.username.parse()?)
            .reply_to(self.config.username.parse()?)
            .to(recipient
                .parse()
                .with_context(|| format!("Cannot parse TO address: {recipient}"))?)
            .subject(REMINDER_EMAIL_SUBJECT)
            .body(text.to_string())?;

        // Try to send email respecting the throttle delay.
        let mut interval = self.throttle_interval.lock().await;
        interval.tick().await;

        let smtp_response = self.transport.send(message).await;
        interval.reset();

        let smtp_response = smtp_response?;
        if smtp_response.is_positive() {
            debug!(
                "SMTP server succeeded with {}: {:?}",
                smtp_response.code(),
                smtp_response.first_line()
            );
        } else {
            bail!(
                "SMTP server failed with {}: {:?}",
                smtp_response.code(),
                smtp_response.first_line()
            );
        }

        Ok(())
    }
}

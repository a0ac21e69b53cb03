mod smtp;

pub use self::smtp::{Smtp, SmtpTransport};
use async_trait::async_trait;

/// A one-way channel capable of delivering a notification text to a destination address. The
/// concrete provider is swappable without touching the scheduler or dispatcher logic.
#[async_trait]
pub trait NotificationChannel: Send + Sync + 'static {
    /// Attempts to deliver the specified text to the specified address, reporting failure via the
    /// returned result. Delivery is "fire-and-forget", there is no read receipt.
    async fn send(&self, address: &str, text: &str) -> anyhow::Result<()>;
}

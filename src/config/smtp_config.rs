use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, DurationMilliSeconds};
use std::time::Duration;

/// Configuration for the SMTP functionality.
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SmtpConfig {
    /// Username to use to authenticate to the SMTP server. Also used as the `FROM` address.
    pub username: String,
    /// Password to use to authenticate to the SMTP server.
    pub password: String,
    /// Address of the SMTP server.
    pub address: String,
    /// The minimum delay between two consecutive emails sent via SMTP.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "default_throttle_delay")]
    pub throttle_delay: Duration,
    /// Optional configuration for catch-all email recipient (used for troubleshooting only).
    pub catch_all: Option<SmtpCatchAllConfig>,
}

/// Configuration for the SMTP catch-all functionality.
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SmtpCatchAllConfig {
    /// Address of the catch-all email recipient.
    pub recipient: String,
    /// Email will be sent to the catch-all recipient instead of original one only if the email
    /// text matches regular expression specified in `text_matcher`.
    #[serde_as(as = "DisplayFromStr")]
    pub text_matcher: Regex,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            username: "taskping@localhost".to_string(),
            password: "".to_string(),
            address: "localhost".to_string(),
            throttle_delay: default_throttle_delay(),
            catch_all: None,
        }
    }
}

const fn default_throttle_delay() -> Duration {
    Duration::from_millis(500)
}

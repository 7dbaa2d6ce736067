use std::time::Duration;

const DEFAULT_HELO: &str = "localhost";
const DEFAULT_MAIL_FROM: &str = "check@local.test";

/// Configuration knobs for [`smtp_probe`](crate::smtp_verify::smtp_probe).
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    pub port: u16,
    /// Applies to the connection and to every command exchange.
    pub timeout: Duration,
    pub helo_domain: String,
    pub mail_from: String,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            port: 25,
            timeout: Duration::from_secs(8),
            helo_domain: DEFAULT_HELO.to_string(),
            mail_from: DEFAULT_MAIL_FROM.to_string(),
        }
    }
}

impl ProbeOptions {
    /// Name announced in `EHLO`/`HELO`.
    pub fn helo_domain(&self) -> &str {
        let trimmed = self.helo_domain.trim();
        if trimmed.is_empty() {
            DEFAULT_HELO
        } else {
            trimmed
        }
    }

    /// Placeholder envelope sender used in `MAIL FROM`.
    pub fn mail_from(&self) -> &str {
        let trimmed = self.mail_from.trim();
        if trimmed.is_empty() {
            DEFAULT_MAIL_FROM
        } else {
            trimmed
        }
    }
}

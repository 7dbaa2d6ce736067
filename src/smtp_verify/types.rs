use std::fmt;

/// A raw SMTP reply, preserving the numeric status code and message text.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpReply {
    pub code: u16,
    pub message: String,
}

impl SmtpReply {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn is_positive_completion(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Any transient or permanent negative reply (status >= 400).
    pub fn is_rejection(&self) -> bool {
        self.code >= 400
    }
}

/// Semantic outcome of a probe.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeResult {
    /// The server accepted the recipient.
    ExistsLikely,
    /// The server rejected the recipient without a policy reason.
    NotExists,
    /// Transient server-side condition (greylisting, rate limiting, ...).
    TempFail,
    /// The server refused to cooperate (policy, relay, authentication, ...).
    ServerBlocked,
    /// No usable SMTP dialogue could be held.
    ConnectionError,
}

impl ProbeResult {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExistsLikely => "exists_likely",
            Self::NotExists => "not_exists",
            Self::TempFail => "temp_fail",
            Self::ServerBlocked => "server_blocked",
            Self::ConnectionError => "connection_error",
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final report of [`smtp_probe`](crate::smtp_verify::smtp_probe).
///
/// `code` is `None` when no server reply was observed for the deciding step.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub result: ProbeResult,
    pub code: Option<u16>,
    pub detail: String,
}

impl ProbeOutcome {
    pub fn new(result: ProbeResult, code: Option<u16>, detail: impl Into<String>) -> Self {
        Self {
            result,
            code,
            detail: detail.into(),
        }
    }

    pub fn connection_error(category: impl Into<String>) -> Self {
        Self::new(ProbeResult::ConnectionError, None, category)
    }

    /// Code as shown in reports, `-` when none was observed.
    pub fn code_str(&self) -> String {
        self.code
            .map(|code| code.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

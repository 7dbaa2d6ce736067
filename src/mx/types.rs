use std::fmt;

/// A single mail exchanger as published in DNS.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailExchanger {
    pub preference: u16,
    pub exchange: String,
}

impl MailExchanger {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainStatus {
    Valid,
    Absent,
    MxInvalid,
}

impl DomainStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Absent => "absent",
            Self::MxInvalid => "mx_invalid",
        }
    }
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of resolving the mail exchangers of one domain.
///
/// `exchangers` is non-empty exactly when `status` is [`DomainStatus::Valid`].
/// `detail` is a short diagnostic token (`NXDOMAIN`, `dns_timeout`, ...).
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainOutcome {
    pub status: DomainStatus,
    pub exchangers: Vec<MailExchanger>,
    pub detail: String,
}

impl DomainOutcome {
    pub(crate) fn valid(exchangers: Vec<MailExchanger>) -> Self {
        Self {
            status: DomainStatus::Valid,
            exchangers,
            detail: "mx_ok".to_string(),
        }
    }

    pub(crate) fn failed(status: DomainStatus, detail: impl Into<String>) -> Self {
        Self {
            status,
            exchangers: Vec::new(),
            detail: detail.into(),
        }
    }

    /// Highest-priority exchanger, if any.
    pub fn primary(&self) -> Option<&MailExchanger> {
        match self.status {
            DomainStatus::Valid => self.exchangers.first(),
            _ => None,
        }
    }
}

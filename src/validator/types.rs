use thiserror::Error;

/// Reasons an input string cannot be turned into a probe target.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid email format")]
    InvalidFormat,
    #[error("missing '@' separator")]
    MissingAt,
    #[error("domain is empty")]
    EmptyDomain,
    #[error("domain IDNA conversion failed: {0}")]
    Idna(String),
}

impl AddressError {
    /// Detail token reported in place of a DNS outcome.
    pub fn detail(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_email_format",
            Self::MissingAt | Self::EmptyDomain | Self::Idna(_) => "invalid_domain",
        }
    }
}

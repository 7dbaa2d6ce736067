use thiserror::Error;
use trust_dns_resolver::{
    error::{ResolveError, ResolveErrorKind},
    proto::op::ResponseCode,
};

#[derive(Debug, Error)]
pub enum MxError {
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: std::io::Error,
    },
}

impl MxError {
    pub(crate) fn resolver_init(source: std::io::Error) -> Self {
        Self::ResolverInit { source }
    }
}

/// Failure of a single MX query, already reduced to the cases the resolver
/// distinguishes in its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("domain does not exist")]
    NxDomain,
    #[error("no MX answer")]
    NoAnswer,
    #[error("no nameserver could answer")]
    NoNameservers,
    #[error("zone redirects the name (YXDOMAIN)")]
    YxDomain,
    #[error("DNS query timed out")]
    Timeout,
    #[error("DNS error ({0})")]
    Other(String),
}

impl LookupError {
    pub fn detail(&self) -> String {
        match self {
            Self::NxDomain => "NXDOMAIN".to_string(),
            Self::NoAnswer => "no_mx_answer".to_string(),
            Self::NoNameservers => "no_nameservers".to_string(),
            Self::YxDomain => "yx_domain".to_string(),
            Self::Timeout => "dns_timeout".to_string(),
            Self::Other(category) => format!("dns_error:{category}"),
        }
    }
}

impl From<&ResolveError> for LookupError {
    fn from(err: &ResolveError) -> Self {
        match err.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
                ResponseCode::NXDomain => Self::NxDomain,
                ResponseCode::NoError => Self::NoAnswer,
                ResponseCode::YXDomain => Self::YxDomain,
                _ => Self::NoNameservers,
            },
            ResolveErrorKind::NoConnections => Self::NoNameservers,
            ResolveErrorKind::Timeout => Self::Timeout,
            ResolveErrorKind::Io(_) => Self::Other("io".to_string()),
            ResolveErrorKind::Proto(_) => Self::Other("proto".to_string()),
            ResolveErrorKind::Message(_) | ResolveErrorKind::Msg(_) => {
                Self::Other("message".to_string())
            }
            _ => Self::Other("unknown".to_string()),
        }
    }
}

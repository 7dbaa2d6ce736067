use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

/// Controls how [`DnsResolver`](crate::mx::DnsResolver) is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Upper bound for a single MX query.
    pub timeout: Duration,
    /// Nameservers used when the system configuration cannot be read.
    pub fallback_nameservers: Vec<IpAddr>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(3),
            fallback_nameservers: vec![
                IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)),
                IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)),
            ],
        }
    }
}

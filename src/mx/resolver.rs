use trust_dns_resolver::{
    Resolver,
    config::{NameServerConfigGroup, ResolverConfig, ResolverOpts},
    system_conf::read_system_conf,
};

use super::{DomainOutcome, DomainStatus, Error, LookupError, MailExchanger, ResolverOptions};

/// Source of MX records for a domain.
pub trait LookupMx {
    /// Returns the raw records in DNS answer order.
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MailExchanger>, LookupError>;
}

impl<T: LookupMx + ?Sized> LookupMx for &T {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MailExchanger>, LookupError> {
        (**self).lookup_mx(domain)
    }
}

/// Synchronous system resolver with the configured timeout applied.
pub struct DnsResolver {
    inner: Resolver,
}

impl DnsResolver {
    /// Builds a resolver from the system configuration, falling back to the
    /// configured public nameservers when it cannot be read.
    pub fn new(options: &ResolverOptions) -> Result<Self, Error> {
        let (config, mut opts) = match read_system_conf() {
            Ok(pair) => pair,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    fallback = ?options.fallback_nameservers,
                    "system resolver configuration unavailable, using fallback nameservers"
                );
                let group =
                    NameServerConfigGroup::from_ips_clear(&options.fallback_nameservers, 53, true);
                (
                    ResolverConfig::from_parts(None, Vec::new(), group),
                    ResolverOpts::default(),
                )
            }
        };
        opts.timeout = options.timeout;
        opts.attempts = 1;
        let inner = Resolver::new(config, opts).map_err(Error::resolver_init)?;
        Ok(Self { inner })
    }
}

impl std::fmt::Debug for DnsResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsResolver").finish_non_exhaustive()
    }
}

impl LookupMx for DnsResolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MailExchanger>, LookupError> {
        let lookup = self
            .inner
            .mx_lookup(domain)
            .map_err(|err| LookupError::from(&err))?;
        Ok(lookup
            .iter()
            .map(|mx| MailExchanger::new(mx.preference(), mx.exchange().to_ascii()))
            .collect())
    }
}

/// Resolves the mail exchangers of `ascii_domain` into a [`DomainOutcome`].
///
/// Null-MX entries are dropped; the remaining exchangers are ordered by
/// ascending preference, keeping answer order for ties.
pub fn check_domain_mx<R>(resolver: &R, ascii_domain: &str) -> DomainOutcome
where
    R: LookupMx + ?Sized,
{
    let records = match resolver.lookup_mx(ascii_domain) {
        Ok(records) => records,
        Err(err) => {
            tracing::debug!(domain = ascii_domain, error = %err, "MX lookup failed");
            let status = match err {
                LookupError::NxDomain => DomainStatus::Absent,
                _ => DomainStatus::MxInvalid,
            };
            return DomainOutcome::failed(status, err.detail());
        }
    };

    let mut exchangers: Vec<MailExchanger> = records
        .into_iter()
        .map(|record| MailExchanger::new(record.preference, normalize_exchange(&record.exchange)))
        .filter(|record| !record.exchange.is_empty())
        .collect();

    if exchangers.is_empty() {
        return DomainOutcome::failed(DomainStatus::MxInvalid, "mx_records_invalid_or_empty");
    }

    exchangers.sort_by_key(|record| record.preference);
    tracing::debug!(
        domain = ascii_domain,
        primary = %exchangers[0].exchange,
        count = exchangers.len(),
        "MX records resolved"
    );
    DomainOutcome::valid(exchangers)
}

pub(crate) fn normalize_exchange(exchange: &str) -> String {
    exchange.trim().trim_end_matches('.').to_string()
}

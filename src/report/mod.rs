//! Batch verification: one [`ReportRow`] per input address.
//!
//! [`Verifier::verify_batch`] validates each address, resolves its domain
//! (once per domain per call), probes the primary exchanger and assembles the
//! row. Nothing that goes wrong for one address stops the batch.

mod table;
mod types;

use std::collections::HashMap;

use crate::mx::{self, DnsResolver, DomainOutcome, DomainStatus, LookupMx};
use crate::smtp_verify::{Connector, ProbeOptions, TcpConnector, smtp_probe};
use crate::validator::validate_email;

pub use table::format_table;
pub use types::{COLUMNS, DomainLabels, ReportRow, SENTINEL, SKIPPED, VerifyOptions};

/// Resolutions already made during one batch, keyed by ASCII domain.
type DomainCache = HashMap<String, DomainOutcome>;

/// Ties a resolver and an SMTP connector together for batch runs.
#[derive(Debug)]
pub struct Verifier<R, C> {
    resolver: R,
    connector: C,
    probe: ProbeOptions,
}

impl Verifier<DnsResolver, TcpConnector> {
    /// System resolver and plain-TCP sessions, configured from `options`.
    pub fn from_options(options: &VerifyOptions) -> Result<Self, mx::Error> {
        let resolver = DnsResolver::new(&options.resolver)?;
        Ok(Self::new(resolver, TcpConnector, options.probe.clone()))
    }
}

impl<R, C> Verifier<R, C>
where
    R: LookupMx,
    C: Connector,
{
    pub fn new(resolver: R, connector: C, probe: ProbeOptions) -> Self {
        Self {
            resolver,
            connector,
            probe,
        }
    }

    /// Verifies `emails` sequentially, returning rows in input order.
    ///
    /// Each domain is resolved at most once per call; every address with a
    /// valid domain still gets its own SMTP probe.
    pub fn verify_batch<I, S>(&self, emails: I) -> Vec<ReportRow>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cache = DomainCache::new();
        emails
            .into_iter()
            .map(|email| {
                let row = self.verify_one(email.as_ref(), &mut cache);
                tracing::info!(
                    email = %row.email,
                    domain_status = %row.domain_status,
                    smtp_result = row.smtp_result(),
                    "address verified"
                );
                row
            })
            .collect()
    }

    fn verify_one(&self, raw: &str, cache: &mut DomainCache) -> ReportRow {
        let email = raw.trim();

        let domain = match validate_email(email) {
            Ok(domain) => domain,
            Err(err) => {
                tracing::debug!(email, error = %err, "address rejected before lookup");
                return ReportRow::skipped(email, DomainStatus::MxInvalid, err.detail());
            }
        };

        let outcome = cache.entry(domain).or_insert_with_key(|domain| {
            tracing::debug!(domain, "resolving MX records");
            mx::check_domain_mx(&self.resolver, domain)
        });

        let Some(primary) = outcome.primary() else {
            return ReportRow::skipped(email, outcome.status, outcome.detail.clone());
        };

        let probe = smtp_probe(&self.connector, email, &primary.exchange, &self.probe);
        ReportRow {
            email: email.to_string(),
            domain_status: outcome.status,
            details: format!("mx:{}; {}", primary.exchange, probe.detail),
            probe: Some(probe),
        }
    }
}

/// Verifies `emails` with the system resolver and plain-TCP SMTP sessions.
///
/// Fails only when no DNS resolver can be built at all.
pub fn verify_emails<I, S>(
    emails: I,
    options: &VerifyOptions,
) -> Result<Vec<ReportRow>, mx::Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(Verifier::from_options(options)?.verify_batch(emails))
}

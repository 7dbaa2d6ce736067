//! DNS MX resolution.
//!
//! The public entry point is [`check_domain_mx`], which queries the mail
//! exchangers of a normalised domain through any [`LookupMx`] implementation
//! and returns a [`DomainOutcome`] describing the result.

mod error;
mod options;
mod resolver;
mod types;

pub use error::{LookupError, MxError as Error};
pub use options::ResolverOptions;
pub use resolver::{DnsResolver, LookupMx, check_domain_mx};
pub use types::{DomainOutcome, DomainStatus, MailExchanger};

#[cfg(test)]
pub(crate) mod tests;

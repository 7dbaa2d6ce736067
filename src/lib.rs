#![forbid(unsafe_code)]
//! mailprobe_lib — plausibility check of e-mail addresses without sending mail
//!
//! An address is checked for syntax, its domain's MX records are resolved and
//! the primary exchanger is asked, through a bare SMTP handshake, what it
//! thinks of the recipient.

pub mod mx;
pub mod report;
pub mod smtp_verify;
pub mod validator;

pub use mx::{
    DnsResolver, DomainOutcome, DomainStatus, Error as MxError, LookupError, LookupMx,
    MailExchanger, ResolverOptions, check_domain_mx,
};
pub use report::{
    COLUMNS, DomainLabels, ReportRow, SENTINEL, SKIPPED, Verifier, VerifyOptions, format_table,
    verify_emails,
};
pub use smtp_verify::{
    Connector, ProbeOptions, ProbeOutcome, ProbeResult, RecipientResponse, SmtpReply,
    SmtpSession, SmtpTransport, TcpConnector, TransportError, classify_smtp, smtp_probe,
};
pub use validator::{AddressError, extract_domain, is_valid_email, validate_email};

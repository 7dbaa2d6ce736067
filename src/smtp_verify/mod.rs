//! SMTP handshake probing.
//!
//! [`smtp_probe`] drives a single session (`EHLO` with one `HELO` fallback,
//! `MAIL FROM`, `RCPT TO`, `QUIT`) against one mail exchanger and turns the
//! recipient reply into a [`ProbeResult`] via [`classify_smtp`]. The session
//! is opened through a [`Connector`], so the state machine runs unchanged
//! against [`TcpConnector`] or a scripted transport.

mod classify;
mod error;
mod options;
mod probe;
mod session;
mod transport;
mod types;

pub use classify::{POLICY_KEYWORDS, classify_smtp};
pub use error::TransportError;
pub use options::ProbeOptions;
pub use probe::{ProbeStage, smtp_probe};
pub use session::{SmtpSession, TcpConnector};
pub use transport::{Connector, RecipientResponse, SmtpTransport};
pub use types::{ProbeOutcome, ProbeResult, SmtpReply};

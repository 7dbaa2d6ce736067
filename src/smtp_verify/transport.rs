use std::time::Duration;

use super::{SmtpReply, TransportError};

/// Answer to a recipient declaration.
///
/// Some clients report a refused recipient as a structured error carrying
/// the per-address replies instead of a plain reply; `Refused` models it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientResponse {
    Reply(SmtpReply),
    Refused(Vec<(String, SmtpReply)>),
}

/// One open SMTP session.
pub trait SmtpTransport {
    fn ehlo(&mut self, name: &str) -> Result<SmtpReply, TransportError>;
    fn helo(&mut self, name: &str) -> Result<SmtpReply, TransportError>;
    fn mail_from(&mut self, sender: &str) -> Result<SmtpReply, TransportError>;
    fn rcpt_to(&mut self, recipient: &str) -> Result<RecipientResponse, TransportError>;
    fn quit(&mut self) -> Result<(), TransportError>;
}

/// Opens sessions against a mail exchanger. The greeting banner has been
/// accepted once `connect` returns.
pub trait Connector {
    type Transport: SmtpTransport;

    fn connect(
        &self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<Self::Transport, TransportError>;
}

impl<C: Connector + ?Sized> Connector for &C {
    type Transport = C::Transport;

    fn connect(
        &self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<Self::Transport, TransportError> {
        (**self).connect(host, port, timeout)
    }
}

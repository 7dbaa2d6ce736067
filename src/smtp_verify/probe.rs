use super::transport::{Connector, RecipientResponse, SmtpTransport};
use super::{ProbeOptions, ProbeOutcome, ProbeResult, SmtpReply, TransportError, classify_smtp};

/// In-session steps of a probe. Connecting happens before the first one and
/// closing after the last, on every exit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStage {
    GreetExtended,
    GreetLegacy,
    Sender,
    Recipient,
}

/// Runs one SMTP handshake against `mx_host` for `email` and classifies the
/// server's opinion of the recipient. Never retries; every failure mode is
/// folded into the returned [`ProbeOutcome`].
pub fn smtp_probe<C>(
    connector: &C,
    email: &str,
    mx_host: &str,
    options: &ProbeOptions,
) -> ProbeOutcome
where
    C: Connector + ?Sized,
{
    tracing::debug!(email, mx_host, port = options.port, "starting SMTP probe");
    let mut transport = match connector.connect(mx_host, options.port, options.timeout) {
        Ok(transport) => transport,
        Err(err) => {
            tracing::debug!(mx_host, error = %err, "SMTP connect failed");
            return outcome_for_error(&err);
        }
    };

    let result = drive(&mut transport, email, options);

    let usable = match &result {
        Ok(_) => true,
        Err(err) => !err.is_transport_failure(),
    };
    if usable {
        if let Err(err) = transport.quit() {
            tracing::debug!(mx_host, error = %err, "QUIT failed");
        }
    }
    drop(transport);

    match result {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::debug!(mx_host, error = %err, "SMTP dialogue aborted");
            outcome_for_error(&err)
        }
    }
}

fn drive<T>(
    transport: &mut T,
    email: &str,
    options: &ProbeOptions,
) -> Result<ProbeOutcome, TransportError>
where
    T: SmtpTransport + ?Sized,
{
    let helo = options.helo_domain();
    let mut stage = ProbeStage::GreetExtended;
    loop {
        tracing::trace!(?stage, "SMTP probe stage");
        stage = match stage {
            ProbeStage::GreetExtended => {
                if transport.ehlo(helo)?.is_rejection() {
                    ProbeStage::GreetLegacy
                } else {
                    ProbeStage::Sender
                }
            }
            ProbeStage::GreetLegacy => {
                let reply = transport.helo(helo)?;
                if reply.is_rejection() {
                    return Ok(ProbeOutcome::new(
                        ProbeResult::ServerBlocked,
                        Some(reply.code),
                        format!("helo_rejected:{}", reply.message),
                    ));
                }
                ProbeStage::Sender
            }
            ProbeStage::Sender => {
                let reply = transport.mail_from(options.mail_from())?;
                if reply.is_rejection() {
                    return Ok(ProbeOutcome::new(
                        classify_smtp(reply.code, &reply.message),
                        Some(reply.code),
                        format!("mail_from_rejected:{}", reply.message),
                    ));
                }
                ProbeStage::Recipient
            }
            ProbeStage::Recipient => {
                let outcome = match transport.rcpt_to(email)? {
                    RecipientResponse::Reply(reply) => recipient_outcome(reply),
                    RecipientResponse::Refused(refused) => {
                        match refused.into_iter().find(|(address, _)| address == email) {
                            Some((_, reply)) => recipient_outcome(reply),
                            None => ProbeOutcome::new(
                                ProbeResult::ServerBlocked,
                                None,
                                "recipients_refused",
                            ),
                        }
                    }
                };
                return Ok(outcome);
            }
        };
    }
}

fn recipient_outcome(reply: SmtpReply) -> ProbeOutcome {
    let result = classify_smtp(reply.code, &reply.message);
    let detail = if reply.message.is_empty() {
        "rcpt_response_empty".to_string()
    } else {
        reply.message
    };
    ProbeOutcome::new(result, Some(reply.code), detail)
}

fn outcome_for_error(err: &TransportError) -> ProbeOutcome {
    match err {
        TransportError::NonAscii => {
            ProbeOutcome::new(ProbeResult::ServerBlocked, None, "email_encoding_error")
        }
        TransportError::Protocol(_) => ProbeOutcome::new(
            ProbeResult::ServerBlocked,
            None,
            format!("smtp_error:{}", err.category()),
        ),
        _ => ProbeOutcome::connection_error(err.category()),
    }
}

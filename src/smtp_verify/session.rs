use std::io::{self, BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use super::transport::{Connector, RecipientResponse, SmtpTransport};
use super::{SmtpReply, TransportError};

/// Plain-TCP SMTP client session.
#[derive(Debug)]
pub struct SmtpSession {
    host: String,
    stream: TcpStream,
    reader: BufReader<TcpStream>,
}

impl SmtpSession {
    /// Connects to the first reachable address of `host:port` and reads the
    /// greeting banner, which must be a 2xx reply.
    pub fn connect(host: &str, port: u16, timeout: Duration) -> Result<Self, TransportError> {
        let addrs: Vec<SocketAddr> = (host, port)
            .to_socket_addrs()
            .map_err(|source| TransportError::Resolve {
                host: host.to_string(),
                source,
            })?
            .collect();
        if addrs.is_empty() {
            return Err(TransportError::NoAddress {
                host: host.to_string(),
            });
        }

        let mut last_err = None;
        for addr in &addrs {
            match TcpStream::connect_timeout(addr, timeout) {
                Ok(stream) => {
                    tracing::debug!(host, %addr, "SMTP connection established");
                    let mut session = Self::from_stream(host, stream, timeout)?;
                    let banner = session.read_reply()?;
                    if !banner.is_positive_completion() {
                        return Err(TransportError::GreetingRejected {
                            code: banner.code,
                            message: banner.message,
                        });
                    }
                    return Ok(session);
                }
                Err(err) => {
                    tracing::debug!(host, %addr, error = %err, "SMTP connection failed");
                    last_err = Some(err);
                }
            }
        }
        Err(TransportError::Connect {
            host: host.to_string(),
            source: last_err.unwrap_or_else(|| {
                io::Error::new(io::ErrorKind::AddrNotAvailable, "no socket address available")
            }),
        })
    }

    fn from_stream(host: &str, stream: TcpStream, timeout: Duration) -> Result<Self, TransportError> {
        stream
            .set_read_timeout(Some(timeout))
            .map_err(TransportError::io)?;
        stream
            .set_write_timeout(Some(timeout))
            .map_err(TransportError::io)?;
        let reader = BufReader::new(stream.try_clone().map_err(TransportError::io)?);
        Ok(Self {
            host: host.to_string(),
            stream,
            reader,
        })
    }

    pub fn command(&mut self, command: &str) -> Result<SmtpReply, TransportError> {
        self.send_command(command)?;
        self.read_reply()
    }

    fn send_command(&mut self, command: &str) -> Result<(), TransportError> {
        if !command.is_ascii() {
            return Err(TransportError::NonAscii);
        }
        tracing::debug!(host = %self.host, "C: {command}");
        let mut line = command.as_bytes().to_vec();
        line.extend_from_slice(b"\r\n");
        self.stream.write_all(&line).map_err(TransportError::io)?;
        self.stream.flush().map_err(TransportError::io)?;
        Ok(())
    }

    fn read_reply(&mut self) -> Result<SmtpReply, TransportError> {
        let mut code = None;
        let mut message_lines = Vec::new();
        loop {
            let mut bytes = Vec::new();
            let read = self
                .reader
                .read_until(b'\n', &mut bytes)
                .map_err(TransportError::io)?;
            if read == 0 {
                return Err(TransportError::Disconnected);
            }
            let raw = String::from_utf8_lossy(&bytes);
            let raw = raw.trim_end_matches(['\r', '\n']);
            tracing::debug!(host = %self.host, "S: {raw}");

            let code_part = raw
                .get(..3)
                .ok_or_else(|| TransportError::Protocol(format!("invalid SMTP reply: '{raw}'")))?;
            if !code_part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TransportError::Protocol(format!(
                    "invalid SMTP status code: '{code_part}'"
                )));
            }
            let parsed_code = code_part.parse::<u16>().map_err(|_| {
                TransportError::Protocol(format!("invalid SMTP status code: '{code_part}'"))
            })?;
            if let Some(existing) = code {
                if existing != parsed_code {
                    return Err(TransportError::Protocol(format!(
                        "inconsistent SMTP reply codes: {existing} vs {parsed_code}"
                    )));
                }
            } else {
                code = Some(parsed_code);
            }
            let continuation = raw.as_bytes().get(3).copied() == Some(b'-');
            message_lines.push(raw.get(4..).unwrap_or_default().to_string());
            if !continuation {
                break;
            }
        }
        let code =
            code.ok_or_else(|| TransportError::Protocol("SMTP reply missing status code".into()))?;
        Ok(SmtpReply::new(code, message_lines.join("\n").trim()))
    }
}

impl SmtpTransport for SmtpSession {
    fn ehlo(&mut self, name: &str) -> Result<SmtpReply, TransportError> {
        self.command(&format!("EHLO {name}"))
    }

    fn helo(&mut self, name: &str) -> Result<SmtpReply, TransportError> {
        self.command(&format!("HELO {name}"))
    }

    fn mail_from(&mut self, sender: &str) -> Result<SmtpReply, TransportError> {
        self.command(&format!("MAIL FROM:<{sender}>"))
    }

    fn rcpt_to(&mut self, recipient: &str) -> Result<RecipientResponse, TransportError> {
        self.command(&format!("RCPT TO:<{recipient}>"))
            .map(RecipientResponse::Reply)
    }

    fn quit(&mut self) -> Result<(), TransportError> {
        self.command("QUIT").map(|_| ())
    }
}

/// [`Connector`] opening plain-TCP [`SmtpSession`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

impl Connector for TcpConnector {
    type Transport = SmtpSession;

    fn connect(
        &self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<SmtpSession, TransportError> {
        SmtpSession::connect(host, port, timeout)
    }
}

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("address resolution for {host} failed: {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("no socket address available for {host}")]
    NoAddress { host: String },
    #[error("connection to {host} failed: {source}")]
    Connect {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("greeting rejected with {code}: {message}")]
    GreetingRejected { code: u16, message: String },
    #[error("I/O error: {source}")]
    Io {
        #[source]
        source: io::Error,
    },
    #[error("connection closed by server")]
    Disconnected,
    #[error("protocol error: {0}")]
    Protocol(String),
    #[error("command contains non-ASCII characters")]
    NonAscii,
}

impl TransportError {
    pub(crate) fn io(source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::UnexpectedEof => Self::Disconnected,
            _ => Self::Io { source },
        }
    }

    /// True when the dialogue broke at the transport level, as opposed to
    /// the server answering something unusable.
    pub fn is_transport_failure(&self) -> bool {
        !matches!(self, Self::Protocol(_) | Self::NonAscii)
    }

    /// Short machine-readable category reported as probe detail.
    pub fn category(&self) -> String {
        match self {
            Self::Resolve { .. } => "name_resolution".to_string(),
            Self::NoAddress { .. } => "no_address".to_string(),
            Self::Connect { source, .. } | Self::Io { source } => io_category(source),
            Self::GreetingRejected { .. } => "greeting_rejected".to_string(),
            Self::Disconnected => "server_disconnected".to_string(),
            Self::Protocol(_) => "protocol".to_string(),
            Self::NonAscii => "encoding".to_string(),
        }
    }
}

fn io_category(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::ConnectionRefused => "connection_refused".to_string(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => "timeout".to_string(),
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe
        | io::ErrorKind::UnexpectedEof => "server_disconnected".to_string(),
        other => format!("io:{other:?}"),
    }
}

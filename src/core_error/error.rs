// Error types shared by the reply parser, the channels and the dispatcher
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures on the control or data channel.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed reply: {0:?}")]
    MalformedReply(String),

    #[error("Connection lost: {0}")]
    ConnectionLost(String),

    #[error("Timed out waiting for the server")]
    Timeout,

    #[error("Cannot parse PASV reply: {0:?}")]
    PasvParseFailure(String),

    #[error("Cannot open data connection: {0}")]
    DataConnectFailure(String),

    #[error("Data transfer failed: {0}")]
    DataTransferFailure(String),

    #[error("Unexpected reply {code}: {text}")]
    UnexpectedReply { code: u16, text: String },
}

/// Failures touching the local filesystem during a transfer.
#[derive(Error, Debug)]
pub enum LocalIoError {
    #[error("Cannot create {path:?}: {source}")]
    LocalCreateFailure { path: PathBuf, source: io::Error },

    #[error("Cannot read {path:?}: {source}")]
    LocalReadFailure { path: PathBuf, source: io::Error },

    #[error("Cannot write {path:?}: {source}")]
    LocalWriteFailure { path: PathBuf, source: io::Error },
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Connection(String),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Io(#[from] LocalIoError),

    #[error("{0}")]
    Usage(String),
}

impl ClientError {
    /// Returns true when the control connection can no longer be used.
    pub fn ends_session(&self) -> bool {
        matches!(
            self,
            ClientError::Connection(_)
                | ClientError::Protocol(ProtocolError::ConnectionLost(_))
                | ClientError::Protocol(ProtocolError::Timeout)
        )
    }

    /// The line shown to the operator for this error.
    pub fn to_display_message(&self) -> String {
        match self {
            ClientError::Usage(usage) => usage.clone(),
            ClientError::Protocol(ProtocolError::ConnectionLost(_)) => {
                "421 Service not available, remote server has closed connection.".to_string()
            }
            ClientError::Protocol(ProtocolError::UnexpectedReply { code, text }) => {
                format!("{} {}", code, text)
            }
            ClientError::Io(LocalIoError::LocalCreateFailure { path, source })
            | ClientError::Io(LocalIoError::LocalReadFailure { path, source })
            | ClientError::Io(LocalIoError::LocalWriteFailure { path, source }) => {
                format!("local: {}: {}", path.display(), source)
            }
            other => other.to_string(),
        }
    }
}

/// Maps a control-channel read/write failure to the protocol taxonomy.
impl From<io::Error> for ProtocolError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::TimedOut => ProtocolError::Timeout,
            _ => ProtocolError::ConnectionLost(error.to_string()),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

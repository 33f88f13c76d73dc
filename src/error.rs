use thiserror::Error;

use crate::ingestion::types::SourceKind;

/// Failures surfaced by the ingestion, query and storage layers.
#[derive(Error, Debug)]
pub enum WordCounterError {
    #[error("Invalid source type: {0}")]
    InvalidSource(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Source unreachable ({kind}): {reason}")]
    SourceUnreachable { kind: SourceKind, reason: String },

    #[error("Store I/O error: {0}")]
    StoreIo(String),
}

/// Result type alias for word counter operations
pub type Result<T> = std::result::Result<T, WordCounterError>;

impl WordCounterError {
    pub fn unreachable(kind: SourceKind, reason: impl ToString) -> Self {
        WordCounterError::SourceUnreachable {
            kind,
            reason: reason.to_string(),
        }
    }

    /// True for failures caused by the request itself rather than the server.
    pub fn is_client_error(&self) -> bool {
        match self {
            WordCounterError::InvalidSource(_) | WordCounterError::InvalidUrl(_) => true,
            WordCounterError::SourceUnreachable { kind, .. } => *kind != SourceKind::Url,
            WordCounterError::StoreIo(_) => false,
        }
    }
}

impl From<std::io::Error> for WordCounterError {
    fn from(err: std::io::Error) -> Self {
        WordCounterError::StoreIo(err.to_string())
    }
}

impl From<bincode::Error> for WordCounterError {
    fn from(err: bincode::Error) -> Self {
        WordCounterError::StoreIo(err.to_string())
    }
}

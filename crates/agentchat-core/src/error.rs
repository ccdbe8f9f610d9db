use thiserror::Error;

/// Failure reported by a session storage backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Failure while reading or writing the persisted transcript
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("history is not valid JSON: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Failure to obtain a well-formed response from the server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never completed (connection refused, DNS, CORS...)
    #[error("request failed: {0}")]
    Request(String),

    /// Non-2xx status whose body was not the expected JSON
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// 2xx status with a body that could not be decoded
    #[error("malformed response: {0}")]
    Decode(String),
}

/// The display surface refused to take a message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("display surface error: {0}")]
pub struct SurfaceError(pub String);

/// Errors surfaced while starting a chat session
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type Result<T, E = ChatError> = std::result::Result<T, E>;

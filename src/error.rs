//! Error types for the security service client

use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a status (connect, DNS, IO)
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. The body is not read.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP status carried by [`ClientError::Http`]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

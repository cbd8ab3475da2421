//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::TransportError;

/// Application errors wrap domain and transport errors and add
/// application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Transport(#[from] TransportError),

    /// The server answered, but not with JSON.
    #[error("invalid JSON in response body (status {status}): {source}")]
    MalformedBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid setting: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    /// Status code of the reply, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApplicationError::MalformedBody { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

//! Infrastructure-level errors (wraps application errors)

use std::time::Duration;

use thiserror::Error;

use crate::application::ApplicationError;

/// Failure of a single HTTP exchange.
///
/// The underlying cause is rendered into `reason` (full source chain) so it
/// survives into the printed report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("connection to {url} failed: {reason}")]
    Connect { url: String, reason: String },

    #[error("request to {url} timed out after {timeout:?}: {reason}")]
    Timeout {
        url: String,
        timeout: Duration,
        reason: String,
    },

    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("failed to build HTTP client: {reason}")]
    Client { reason: String },
}

impl TransportError {
    /// Classify a reqwest error, keeping the whole cause chain.
    pub fn from_reqwest(url: &str, timeout: Duration, err: reqwest::Error) -> Self {
        let reason = error_chain(&err);
        let url = url.to_string();
        if err.is_timeout() {
            Self::Timeout {
                url,
                timeout,
                reason,
            }
        } else if err.is_connect() {
            Self::Connect { url, reason }
        } else {
            Self::Request { url, reason }
        }
    }
}

/// Render an error and all of its sources as `outer: inner: root`.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut current = err.source();
    while let Some(source) = current {
        let text = source.to_string();
        if !parts.iter().any(|p| p == &text) {
            parts.push(text);
        }
        current = source.source();
    }
    parts.join(": ")
}

/// Infrastructure errors wrap application errors and add I/O-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;

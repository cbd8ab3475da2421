//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid request descriptors.
/// These are raised before anything touches the network.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid export format: {0} (expected 0=PDF, 1=PNG, 2=SVG, 3=RmBundle, 4=RmHtml)")]
    InvalidFormat(i64),

    #[error("invalid export format: {0:?} is not an integer")]
    UnparsableFormat(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

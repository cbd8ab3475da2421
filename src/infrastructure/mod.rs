//! Infrastructure layer: HTTP transport and DI container
//!
//! This layer implements the I/O boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod traits;

pub use di::ServiceContainer;
pub use error::{InfraError, InfraResult, TransportError};
pub use traits::{HttpReply, HttpTransport, ReqwestTransport};

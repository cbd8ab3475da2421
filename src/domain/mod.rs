//! Domain layer: request descriptors and payload building
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod entities;
pub mod error;

pub use builder::build_payload;
pub use entities::*;
pub use error::{DomainError, DomainResult};

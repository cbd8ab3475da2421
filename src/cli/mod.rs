//! CLI layer: argument parsing, command dispatch and reporting

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod report;
pub mod smoke;

pub use args::{Cli, Commands};
pub use error::{CliError, CliResult};

//! Client for the RMHook HTTP server.
//!
//! Builds export/import requests from command-line arguments, sends each as a
//! single blocking HTTP call and reports the outcome.
//!
//! Layers, innermost first:
//! - [`domain`]: request descriptors and the JSON payload builder
//! - [`application`]: the document service (submit, health)
//! - [`infrastructure`]: the HTTP transport and dependency wiring
//! - [`cli`]: argument parsing, dispatch and console reporting

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

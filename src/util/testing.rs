//! Test support: logging setup, a scripted transport and a closed loopback port.

use std::env;
use std::net::TcpListener;
use std::sync::{Mutex, Once};
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::traits::{HttpReply, HttpTransport};
use crate::infrastructure::TransportError;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // reqwest/hyper internals drown out our own spans at trace level
    let noisy_modules = ["hyper", "reqwest::connect", "h2"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

// ============================================================
// FAKE TRANSPORT
// ============================================================

/// One call seen by [`FakeTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
    pub timeout: Duration,
}

/// Transport that answers calls from a script and records what it was asked.
///
/// The n-th call gets the n-th outcome; once the script runs out the last
/// outcome repeats.
#[derive(Debug)]
pub struct FakeTransport {
    script: Vec<Result<HttpReply, TransportError>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeTransport {
    pub fn scripted(script: Vec<Result<HttpReply, TransportError>>) -> Self {
        assert!(!script.is_empty(), "FakeTransport needs at least one outcome");
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(status: u16, body: &str) -> Self {
        Self::scripted(vec![Ok(HttpReply::new(status, body))])
    }

    pub fn failing(error: TransportError) -> Self {
        Self::scripted(vec![Err(error)])
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, call: RecordedCall) -> Result<HttpReply, TransportError> {
        let mut calls = self
            .calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let index = calls.len().min(self.script.len() - 1);
        calls.push(call);
        self.script[index].clone()
    }
}

impl HttpTransport for FakeTransport {
    fn post_json(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<HttpReply, TransportError> {
        self.record(RecordedCall {
            method: "POST",
            url: url.to_string(),
            body: Some(body.clone()),
            timeout,
        })
    }

    fn get(&self, url: &str, timeout: Duration) -> Result<HttpReply, TransportError> {
        self.record(RecordedCall {
            method: "GET",
            url: url.to_string(),
            body: None,
            timeout,
        })
    }
}

/// A loopback address nobody listens on.
pub fn closed_port_url() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
    }
}

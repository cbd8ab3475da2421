//! I/O boundary traits for testability
//!
//! The HTTP exchange is abstracted so services can be tested against a fake
//! server reply without a network.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, trace};

use crate::infrastructure::error::TransportError;

/// Raw reply from the server: status code and undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Blocking HTTP abstraction. One call per method invocation, no retries.
pub trait HttpTransport: Send + Sync {
    /// POST a JSON body.
    fn post_json(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<HttpReply, TransportError>;

    /// Plain GET.
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpReply, TransportError>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Transport backed by `reqwest::blocking`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("rmhook/", env!("CARGO_PKG_VERSION")))
            // the hook server sits on the local machine or USB network
            .no_proxy()
            .build()
            .map_err(|e| TransportError::Client {
                reason: crate::infrastructure::error::error_chain(&e),
            })?;
        Ok(Self { client })
    }

    fn send(
        &self,
        request: RequestBuilder,
        url: &str,
        timeout: Duration,
    ) -> Result<HttpReply, TransportError> {
        let response = request
            .timeout(timeout)
            .send()
            .map_err(|e| TransportError::from_reqwest(url, timeout, e))?;
        let status = response.status().as_u16();
        debug!("{} -> {}", url, status);
        let body = response
            .text()
            .map_err(|e| TransportError::from_reqwest(url, timeout, e))?;
        trace!("body: {}", body);
        Ok(HttpReply { status, body })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<HttpReply, TransportError> {
        debug!("POST {} (timeout {:?})", url, timeout);
        self.send(self.client.post(url).json(body), url, timeout)
    }

    fn get(&self, url: &str, timeout: Duration) -> Result<HttpReply, TransportError> {
        debug!("GET {} (timeout {:?})", url, timeout);
        self.send(self.client.get(url), url, timeout)
    }
}

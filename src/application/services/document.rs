//! Document service
//!
//! Sends export/import requests and health checks to the RMHook server.
//! Every method performs exactly one HTTP call; there is no retry.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{build_payload, ApiResponse, DocumentRequest};
use crate::infrastructure::traits::{HttpReply, HttpTransport};

/// Health check path.
pub const HEALTH_PATH: &str = "/health";

/// Where the server lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEndpoint {
    /// Base URL without trailing slash
    pub base_url: String,
    /// Export/import timeout
    pub request_timeout: Duration,
    /// Health check timeout
    pub health_timeout: Duration,
}

impl ServerEndpoint {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Service for talking to the server's document endpoints.
pub struct DocumentService {
    http: Arc<dyn HttpTransport>,
    server: ServerEndpoint,
}

impl DocumentService {
    /// Create a new document service.
    pub fn new(http: Arc<dyn HttpTransport>, server: ServerEndpoint) -> Self {
        Self { http, server }
    }

    /// POST the request's payload to its endpoint.
    ///
    /// A non-200 reply is still `Ok`; callers decide via
    /// [`ApiResponse::is_success`]. Transport failures and non-JSON bodies
    /// are errors.
    pub fn submit(&self, request: &DocumentRequest) -> ApplicationResult<ApiResponse> {
        let url = self.server.url(request.endpoint());
        let payload = build_payload(request);
        info!("{} request -> {}", request.kind().label(), url);
        debug!("payload: {}", payload);

        let reply = self
            .http
            .post_json(&url, &payload, self.server.request_timeout)?;
        decode(reply)
    }

    /// GET /health.
    pub fn health(&self) -> ApplicationResult<ApiResponse> {
        let url = self.server.url(HEALTH_PATH);
        info!("health check -> {}", url);

        let reply = self.http.get(&url, self.server.health_timeout)?;
        decode(reply)
    }
}

fn decode(reply: HttpReply) -> ApplicationResult<ApiResponse> {
    let body = serde_json::from_str(&reply.body).map_err(|source| {
        ApplicationError::MalformedBody {
            status: reply.status,
            source,
        }
    })?;
    Ok(ApiResponse::new(reply.status, body))
}

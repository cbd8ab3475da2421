//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::DocumentService;
use crate::config::Settings;
use crate::infrastructure::error::InfraResult;
use crate::infrastructure::traits::{HttpTransport, ReqwestTransport};

/// Container holding the settings and the HTTP transport.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// HTTP abstraction
    pub http: Arc<dyn HttpTransport>,
}

impl ServiceContainer {
    /// Create a new service container with the real HTTP client.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let http = ReqwestTransport::new()?;
        Ok(Self::with_deps(settings, Arc::new(http)))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, http: Arc<dyn HttpTransport>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, http }
    }

    /// Document service bound to the configured server.
    pub fn document_service(&self) -> DocumentService {
        DocumentService::new(self.http.clone(), self.settings.server())
    }
}

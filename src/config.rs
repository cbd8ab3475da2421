//! Client settings
//!
//! Compiled defaults only. The single override is the `--base-url` flag;
//! nothing is read from files or the environment.

use std::time::Duration;

use crate::application::services::ServerEndpoint;
use crate::application::ApplicationError;

/// Default server address: the hook listens on loopback only.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Per-call timeouts in seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Export and import calls
    pub request_secs: u64,
    /// Health check
    pub health_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 10,
            health_secs: 5,
        }
    }
}

/// Unified configuration for rmhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Server base URL (default: http://localhost:8080)
    pub base_url: String,
    pub timeouts: TimeoutConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeouts: TimeoutConfig::default(),
        }
    }
}

impl Settings {
    /// Apply a command-line base URL override.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Result<Self, ApplicationError> {
        if let Some(url) = base_url {
            self.base_url = url;
            self.validate()?;
        }
        Ok(self)
    }

    /// Reject values that cannot produce a working client.
    ///
    /// The client is built without TLS, so only plain `http://` is usable.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if !self.base_url.starts_with("http://") {
            return Err(ApplicationError::Config {
                message: format!("base_url must start with http://: {}", self.base_url),
            });
        }
        if self.timeouts.request_secs == 0 || self.timeouts.health_secs == 0 {
            return Err(ApplicationError::Config {
                message: "timeouts must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }

    /// Server address and timeouts as handed to the document service.
    pub fn server(&self) -> ServerEndpoint {
        ServerEndpoint {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(self.timeouts.request_secs),
            health_timeout: Duration::from_secs(self.timeouts.health_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_settings_when_created_then_points_at_loopback() {
        let settings = Settings::default();
        assert_eq!(settings.base_url, "http://localhost:8080");
        assert_eq!(settings.timeouts.request_secs, 10);
        assert_eq!(settings.timeouts.health_secs, 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn given_trailing_slash_when_building_server_then_slash_is_dropped() {
        let settings = Settings {
            base_url: "http://10.0.0.2:9000/".to_string(),
            ..Settings::default()
        };
        let server = settings.server();
        assert_eq!(server.base_url, "http://10.0.0.2:9000");
        assert_eq!(server.request_timeout, Duration::from_secs(10));
        assert_eq!(server.health_timeout, Duration::from_secs(5));
    }

    #[test]
    fn given_no_override_when_applying_base_url_then_default_kept() {
        let settings = Settings::default().with_base_url(None).expect("settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_base_url_without_scheme_when_validating_then_errors() {
        let result = Settings::default().with_base_url(Some("localhost:8080".into()));
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_https_base_url_when_validating_then_rejected_for_missing_tls() {
        let result = Settings::default().with_base_url(Some("https://10.11.99.1:8080".into()));

        let err = result.unwrap_err();
        assert!(matches!(err, ApplicationError::Config { .. }));
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn given_zero_timeout_when_validating_then_errors() {
        let settings = Settings {
            timeouts: TimeoutConfig {
                request_secs: 0,
                health_secs: 5,
            },
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}

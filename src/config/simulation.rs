//! Simulation service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the external simulation service.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Base URL of the simulation service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. `None` means no client-side timeout:
    /// a run stays in flight until the transport resolves. This matches the
    /// historical behavior of the scenario screen; deployments can opt in to
    /// a bound.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl SimulationConfig {
    /// Get timeout as Duration, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Base URL with any trailing slash removed, for joining paths
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate simulation service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::EmptyBaseUrl);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if let Some(secs) = self.timeout_secs {
            if secs == 0 || secs > 3600 {
                return Err(ValidationError::InvalidTimeout);
            }
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

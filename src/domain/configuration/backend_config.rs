//! Backend configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoachConfig {
    /// Text-generation backend configuration.
    #[serde(default)]
    pub backend: BackendConfig,
}

impl CoachConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.backend.validate()
    }
}

/// Connection settings for the local text-generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// Base URL of the Ollama server.
    #[serde(default = "default_endpoint")]
    pub endpoint: Url,
    /// Model identifier passed to the backend.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds. `None` waits for the backend indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: None,
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !matches!(self.endpoint.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "endpoint must use http or https, got '{}'",
                self.endpoint.scheme()
            )));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(AppError::InvalidConfig(
                "temperature must be a finite, non-negative number".to_string(),
            ));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// URL of the non-streaming generation endpoint.
    ///
    /// A path prefix on the endpoint is kept whether or not it ends in `/`.
    pub fn generate_url(&self) -> Result<Url, AppError> {
        let mut base = self.endpoint.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join("api/generate").map_err(|e| {
            AppError::InvalidConfig(format!("Cannot derive generate URL from endpoint: {}", e))
        })
    }
}

fn default_endpoint() -> Url {
    Url::parse("http://localhost:11434").expect("Default endpoint URL must be valid")
}

fn default_model() -> String {
    "gemma:2b".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

//! Ollama generate API client implementation using reqwest.

use std::error::Error as _;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, BackendConfig};
use crate::ports::TextGenerator;

const DEFAULT_STATUS_MESSAGE: &str = "Ollama generate request failed";

/// HTTP transport for a local Ollama server.
///
/// One blocking `POST /api/generate` per call, with streaming disabled. There
/// is no retry; failures are classified and returned to the caller.
#[derive(Clone)]
pub struct HttpOllamaClient {
    generate_url: Url,
    model: String,
    temperature: f32,
    client: Client,
}

impl std::fmt::Debug for HttpOllamaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpOllamaClient")
            .field("generate_url", &self.generate_url.as_str())
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl HttpOllamaClient {
    /// Create a client for the backend described by `config`.
    pub fn new(config: &BackendConfig) -> Result<Self, AppError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            generate_url: config.generate_url()?,
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }

    fn send_request(&self, request: &ApiRequest<'_>) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.generate_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(transport_error)?;

        let status = response.status();
        let body_text = response.text().map_err(transport_error)?;

        if status.is_success() {
            let api_response: ApiResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::BackendProtocol {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            if let Some(error) = api_response.error {
                return Err(AppError::BackendProtocol {
                    message: error,
                    status: Some(status.as_u16()),
                });
            }

            return api_response.response.ok_or_else(|| AppError::BackendProtocol {
                message: "No response text in backend reply".into(),
                status: Some(status.as_u16()),
            });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::BackendProtocol { message, status: Some(status.as_u16()) })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerationOptions,
}

#[derive(Debug, Serialize)]
struct GenerationOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Map a reqwest failure onto the unavailable/protocol split.
fn transport_error(err: reqwest::Error) -> AppError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    if err.is_connect() || err.is_timeout() {
        AppError::BackendUnavailable(message)
    } else {
        AppError::BackendProtocol {
            message: format!("HTTP request failed: {}", message),
            status: None,
        }
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    match parsed.get("error") {
        Some(serde_json::Value::String(msg)) => return Some(msg.clone()),
        Some(error) => {
            if let Some(msg) = error.get("message").and_then(|message| message.as_str()) {
                return Some(msg.to_string());
            }
        }
        None => {}
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl TextGenerator for HttpOllamaClient {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let request = ApiRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerationOptions { temperature: self.temperature },
        };

        self.send_request(&request)
    }
}

use std::io;

use thiserror::Error;

use crate::domain::prompt::PromptRenderError;

/// Library-wide error type for focuscoach operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file does not exist at the requested path.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Prompt template could not be rendered.
    #[error(transparent)]
    PromptRender(#[from] PromptRenderError),

    /// The model backend could not be reached (not running, refused, timed out).
    #[error("Model backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The model backend answered, but not with a usable generation.
    #[error("Model backend error: {message}")]
    BackendProtocol { message: String, status: Option<u16> },
}

impl AppError {
    /// Whether the failure is transient on the backend side.
    ///
    /// Nothing in this crate retries; callers that want to can key off this.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::BackendUnavailable(_) => true,
            AppError::BackendProtocol { status, .. } => {
                status.is_some_and(|code| code == 408 || code == 429 || code >= 500)
            }
            AppError::Io(_)
            | AppError::InvalidConfig(_)
            | AppError::ConfigMissing(_)
            | AppError::TomlParseError(_)
            | AppError::PromptRender(_) => false,
        }
    }
}

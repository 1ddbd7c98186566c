//! Configuration parsing.

use crate::domain::{AppError, CoachConfig};

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<CoachConfig, AppError> {
    let config: CoachConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

//! Configuration loading from disk.

use std::path::Path;

use crate::domain::{AppError, CoachConfig, parse_config_content};

/// Load and parse a TOML configuration file.
pub fn load_config(path: &Path) -> Result<CoachConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::ConfigMissing(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_config_content(&content)
}

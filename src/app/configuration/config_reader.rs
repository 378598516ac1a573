//! Configuration loading from `promptlab.toml`.

use std::fs;
use std::path::Path;

use crate::domain::configuration::app_config::CONFIG_FILE;
use crate::domain::configuration::parse_config_content;
use crate::domain::{AppConfig, AppError};

/// Load configuration relative to the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    load_config_from(explicit, &std::env::current_dir()?)
}

/// Load configuration from `explicit`, else `<dir>/promptlab.toml`, else defaults.
///
/// An explicit path must exist; the default file is optional.
pub fn load_config_from(explicit: Option<&Path>, dir: &Path) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let path = dir.join(CONFIG_FILE);
            if !path.exists() {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                return Ok(AppConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)?;
    let config = parse_config_content(&content)?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

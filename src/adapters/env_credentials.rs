//! Credential lookup from the process environment and `.env` files.

use std::path::{Path, PathBuf};

use crate::domain::completion::API_KEY_ENV;
use crate::domain::{ApiKey, AppError};

/// Load variables from an env file into the process environment.
///
/// With an explicit `path` the file must exist. Without one, a `.env` in the
/// working directory (or a parent) is loaded if present. Variables already set
/// in the environment are never overridden.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, AppError> {
    match path {
        Some(path) => {
            dotenv::from_path(path).map_err(|e| {
                AppError::Configuration(format!(
                    "Failed to load env file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            tracing::debug!(path = %path.display(), "loaded env file");
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenv::dotenv() {
            Ok(found) => {
                tracing::debug!(path = %found.display(), "loaded env file");
                Ok(Some(found))
            }
            Err(err) if err.not_found() => Ok(None),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable .env file");
                Ok(None)
            }
        },
    }
}

/// Read the completion credential. An unset variable yields a missing key.
pub fn api_key_from_env() -> ApiKey {
    ApiKey::new(std::env::var(API_KEY_ENV).unwrap_or_default())
}

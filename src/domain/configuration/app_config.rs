//! Application configuration loaded from `promptlab.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, Category, completion};

/// Configuration file name looked up in the working directory.
pub const CONFIG_FILE: &str = "promptlab.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Completion endpoint configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// Interactive session defaults.
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()?;
        self.session.validate()?;
        Ok(())
    }
}

/// Completion endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Chat-completion endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Value of the `HTTP-Referer` header.
    #[serde(default = "default_referer")]
    pub referer: String,
    /// Value of the `X-Title` header.
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
            referer: default_referer(),
            title: default_title(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.referer.trim().is_empty() {
            return Err(AppError::InvalidConfig("referer must not be empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidConfig("title must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_endpoint() -> Url {
    Url::parse("https://openrouter.ai/api/v1/chat/completions")
        .expect("Default endpoint URL must be valid")
}

fn default_timeout() -> u64 {
    60
}

fn default_referer() -> String {
    "https://localhost:3000".to_string()
}

fn default_title() -> String {
    "KC ProspectIQ Prompt Tester".to_string()
}

/// Defaults for a fresh session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Model selected when the session starts.
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Category selected when the session starts (display name or slug).
    #[serde(default = "default_category")]
    pub default_category: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { default_model: default_model(), default_category: default_category() }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.default_model.trim().is_empty() {
            return Err(AppError::InvalidConfig("default_model must not be empty".to_string()));
        }
        self.category()?;
        Ok(())
    }

    /// Resolve `default_category` to a known category.
    pub fn category(&self) -> Result<Category, AppError> {
        Category::from_name(&self.default_category).ok_or_else(|| {
            AppError::InvalidConfig(format!(
                "default_category '{}' is not one of: {}",
                self.default_category,
                Category::available()
            ))
        })
    }
}

fn default_model() -> String {
    completion::default_model().to_string()
}

fn default_category() -> String {
    Category::default().display_name().to_string()
}

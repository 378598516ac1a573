use std::io;

use thiserror::Error;

use crate::domain::completion::CompletionError;
use crate::domain::prompt::RenderError;

/// Library-wide error type for promptlab operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Category name did not match any stock template.
    #[error("Category '{name}' not found. Available: {available}")]
    CategoryNotFound { name: String, available: String },

    /// One or more subject fields were blank.
    #[error(
        "Please fill in all required fields: First Name, Last Name, City, and State (missing: {})",
        .missing.join(", ")
    )]
    IncompleteInput { missing: Vec<String> },

    /// Template could not be rendered against the subject fields.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Completion call failed.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// Interactive input failed or was rejected.
    #[error("{0}")]
    Validation(String),
}

//! Completion request model and failure classification.

use std::fmt;

use thiserror::Error;

/// Environment variable holding the completion endpoint credential.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f32 = 0.7;

/// Completion length cap sent with every request.
pub const MAX_TOKENS: u32 = 2048;

/// Model identifiers offered by the selector. The first entry is the default.
pub const MODELS: [&str; 10] = [
    "google/gemini-2.5-flash",
    "google/gemini-2.0-flash-001",
    "google/gemini-3-pro-preview",
    "google/gemini-2.5-pro",
    "openai/gpt-4.1-mini",
    "openai/gpt-5-mini",
    "openai/gpt-4o-mini",
    "openai/gpt-5",
    "openai/gpt-4.1",
    "x-ai/grok-code-fast-1",
];

pub fn default_model() -> &'static str {
    MODELS[0]
}

/// Bearer credential for the completion endpoint.
///
/// May be empty: absence is reported when a call is attempted, not at startup.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn is_missing(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn expose(&self) -> &str {
        self.0.trim()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_missing() {
            f.write_str("ApiKey(<missing>)")
        } else {
            f.write_str("ApiKey([REDACTED])")
        }
    }
}

/// A single chat-completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Build a request with the fixed sampling parameters.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// Classified failure of a completion call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("API key not found in environment variables (set {}).", API_KEY_ENV)]
    MissingCredential,

    /// Non-200 status; `message` comes from the error body or is "Unknown error".
    #[error("API Error: {message}")]
    Remote { status: u16, message: String },

    #[error("Request timeout. The API took too long to respond.")]
    Timeout,

    #[error("Request failed: {0}")]
    Transport(String),

    /// 200 status whose body lacks `choices[0].message.content`.
    #[error("Unexpected API response: {0}")]
    MalformedResponse(String),
}

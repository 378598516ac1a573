//! Completion client port definition.

use crate::domain::{ApiKey, CompletionError, CompletionRequest};

/// Port for chat-completion calls.
pub trait CompletionClient {
    /// Send one request and return the generated text.
    ///
    /// Implementations reject a missing key with
    /// [`CompletionError::MissingCredential`] before any I/O, and make exactly
    /// one attempt.
    fn complete(
        &self,
        request: &CompletionRequest,
        api_key: &ApiKey,
    ) -> Result<String, CompletionError>;
}

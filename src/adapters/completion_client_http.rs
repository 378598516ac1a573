//! Chat-completion client implementation using reqwest.

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{ApiConfig, ApiKey, AppError, CompletionError, CompletionRequest};
use crate::ports::CompletionClient;

const HTTP_REFERER: &str = "HTTP-Referer";
const X_TITLE: &str = "X-Title";
const UNKNOWN_ERROR: &str = "Unknown error";

/// HTTP client for an OpenAI-compatible chat-completion endpoint.
#[derive(Clone)]
pub struct HttpCompletionClient {
    endpoint: Url,
    referer: String,
    title: String,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("endpoint", &self.endpoint)
            .field("referer", &self.referer)
            .field("title", &self.title)
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            referer: config.referer.clone(),
            title: config.title.clone(),
            client,
        })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: [ApiMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a CompletionRequest> for ApiRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            messages: [ApiMessage { role: "user", content: &request.prompt }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    #[serde(default)]
    message: Option<ApiChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

impl CompletionClient for HttpCompletionClient {
    fn complete(
        &self,
        request: &CompletionRequest,
        api_key: &ApiKey,
    ) -> Result<String, CompletionError> {
        if api_key.is_missing() {
            return Err(CompletionError::MissingCredential);
        }

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %request.model,
            prompt_chars = request.prompt.chars().count(),
            "sending completion request"
        );
        let started = Instant::now();

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(api_key.expose())
            .header(HTTP_REFERER, &self.referer)
            .header(X_TITLE, &self.title)
            .header(CONTENT_TYPE, "application/json")
            .json(&ApiRequest::from(request))
            .send()
            .map_err(classify_transport_error)?;

        let status = response.status();
        let body = response.text().map_err(classify_transport_error)?;

        tracing::debug!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            body_bytes = body.len(),
            "completion response received"
        );

        if status == StatusCode::OK {
            extract_content(&body)
        } else {
            Err(CompletionError::Remote {
                status: status.as_u16(),
                message: extract_error_message(&body),
            })
        }
    }
}

fn classify_transport_error(err: reqwest::Error) -> CompletionError {
    if err.is_timeout() {
        tracing::debug!(error = %err, "completion request timed out");
        CompletionError::Timeout
    } else {
        CompletionError::Transport(err.to_string())
    }
}

/// Pull `choices[0].message.content` out of a success body.
fn extract_content(body: &str) -> Result<String, CompletionError> {
    let response: ApiResponse = serde_json::from_str(body).map_err(|e| {
        CompletionError::MalformedResponse(format!("response body is not valid JSON: {}", e))
    })?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| {
            CompletionError::MalformedResponse("missing choices[0].message.content".to_string())
        })
}

/// Pull `error.message` out of an error body, or fall back to "Unknown error".
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .and_then(|detail| detail.message)
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

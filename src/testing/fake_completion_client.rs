use std::sync::{Arc, Mutex};

use crate::domain::{ApiKey, CompletionError, CompletionRequest};
use crate::ports::CompletionClient;

/// Completion client that records requests and returns a canned reply.
#[derive(Clone)]
pub struct FakeCompletionClient {
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    reply: Result<String, CompletionError>,
}

impl FakeCompletionClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), reply: Ok(text.into()) }
    }

    pub fn failing(error: CompletionError) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), reply: Err(error) }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl CompletionClient for FakeCompletionClient {
    fn complete(
        &self,
        request: &CompletionRequest,
        api_key: &ApiKey,
    ) -> Result<String, CompletionError> {
        if api_key.is_missing() {
            return Err(CompletionError::MissingCredential);
        }
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

use crate::domain::{ApiKey, AppConfig};
use crate::ports::CompletionClient;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CompletionClient> {
    client: C,
    config: AppConfig,
    api_key: ApiKey,
}

impl<C: CompletionClient> AppContext<C> {
    /// Create a new application context.
    pub fn new(client: C, config: AppConfig, api_key: ApiKey) -> Self {
        Self { client, config, api_key }
    }

    /// Get a reference to the completion client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the credential resolved at startup (possibly missing).
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

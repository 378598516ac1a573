//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::env_credentials::{api_key_from_env, load_env_file};
use crate::adapters::{DialoguerConsole, HttpCompletionClient};
use crate::app::AppContext;
use crate::app::commands::{catalog, generate, interactive};
use crate::app::configuration::load_config;
use crate::domain::{AppConfig, Category, SessionState};

pub use crate::app::commands::catalog::{CategoryEntry, ModelEntry};
pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome, Generation};
pub use crate::domain::AppError;

/// Where to look for configuration and credentials.
#[derive(Debug, Clone, Default)]
pub struct RuntimeOptions {
    /// Explicit config file; `./promptlab.toml` is used when present otherwise.
    pub config_path: Option<PathBuf>,
    /// Explicit env file; `.env` is used when present otherwise.
    pub env_file: Option<PathBuf>,
}

/// Build the production context: env file, config, HTTP client, credential.
fn create_context(runtime: &RuntimeOptions) -> Result<AppContext<HttpCompletionClient>, AppError> {
    load_env_file(runtime.env_file.as_deref())?;
    let config = load_config(runtime.config_path.as_deref())?;
    let client = HttpCompletionClient::new(&config.api)?;
    let api_key = api_key_from_env();
    if api_key.is_missing() {
        tracing::debug!("no API key configured; calls will fail until one is set");
    }
    Ok(AppContext::new(client, config, api_key))
}

fn load_only_config(runtime: &RuntimeOptions) -> Result<AppConfig, AppError> {
    load_config(runtime.config_path.as_deref())
}

// =============================================================================
// Generate API
// =============================================================================

/// Render a stock (or file) template for one subject and call the model once.
pub fn generate(
    runtime: &RuntimeOptions,
    options: GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(runtime)?;
    generate::run(&ctx, options)
}

// =============================================================================
// Interactive Session API
// =============================================================================

/// Run the menu-driven session on the terminal until the user quits.
pub fn interactive(runtime: &RuntimeOptions) -> Result<(), AppError> {
    let ctx = create_context(runtime)?;
    let session_config = &ctx.config().session;
    let mut session =
        SessionState::new(session_config.category()?, session_config.default_model.clone());
    let mut console = DialoguerConsole::new();
    interactive::run_session(&ctx, &mut session, &mut console)
}

// =============================================================================
// Catalog API
// =============================================================================

/// List categories, marking the configured default.
pub fn templates(runtime: &RuntimeOptions) -> Result<Vec<CategoryEntry>, AppError> {
    let config = load_only_config(runtime)?;
    Ok(catalog::list_categories(config.session.category()?))
}

/// Stock template text for one category.
pub fn template(name: &str) -> Result<(Category, &'static str), AppError> {
    catalog::show_template(name)
}

/// List selectable models, marking the configured default.
pub fn models(runtime: &RuntimeOptions) -> Result<Vec<ModelEntry>, AppError> {
    let config = load_only_config(runtime)?;
    Ok(catalog::list_models(&config.session.default_model))
}

//! Request pipeline: validate fields, render the template, call the endpoint.

use std::fs;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{
    ApiKey, AppError, Category, CompletionError, CompletionRequest, FieldValues, SessionState,
    prompt, templates,
};
use crate::ports::CompletionClient;

/// What to render and where to send it.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateInput {
    pub fields: FieldValues,
    pub template: String,
    pub model: String,
}

impl GenerateInput {
    /// Snapshot the current session.
    pub fn from_session(session: &SessionState) -> Self {
        Self {
            fields: session.fields().clone(),
            template: session.template().to_string(),
            model: session.model().to_string(),
        }
    }
}

/// A completed round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub request: CompletionRequest,
    pub response: String,
}

/// Run every local check and build the request, without any network I/O.
pub fn prepare(input: &GenerateInput) -> Result<CompletionRequest, AppError> {
    input.fields.validate()?;
    let model = input.model.trim();
    if model.is_empty() {
        return Err(AppError::Validation("Model identifier must not be empty".to_string()));
    }
    let rendered = prompt::render(&input.template, &input.fields)?;
    Ok(CompletionRequest::new(model, rendered))
}

/// Render `input` and make a single completion call.
///
/// The credential is checked first, then the fields, then the template; the
/// client is only reached once all three pass.
pub fn execute<C: CompletionClient>(
    client: &C,
    api_key: &ApiKey,
    input: &GenerateInput,
) -> Result<Generation, AppError> {
    if api_key.is_missing() {
        return Err(CompletionError::MissingCredential.into());
    }
    let request = prepare(input)?;

    tracing::info!(model = %request.model, "generating response");
    let response = client.complete(&request, api_key)?;
    Ok(Generation { request, response })
}

/// Run the pipeline on the session's current state.
pub fn submit<C: CompletionClient>(
    session: &SessionState,
    client: &C,
    api_key: &ApiKey,
) -> Result<Generation, AppError> {
    execute(client, api_key, &GenerateInput::from_session(session))
}

/// Options for the one-shot `generate` command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub fields: FieldValues,
    /// Category name or slug; the configured default when `None`.
    pub category: Option<String>,
    /// Model identifier; the configured default when `None`.
    pub model: Option<String>,
    /// Read the template from this file instead of the stock text.
    pub template_file: Option<PathBuf>,
    /// Render only; skip the remote call.
    pub prompt_preview: bool,
}

/// Result of the one-shot `generate` command.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    Preview { category: Category, request: CompletionRequest },
    Completed { category: Category, generation: Generation },
}

impl GenerateOutcome {
    /// Text to print: the response, or the rendered prompt for a preview.
    pub fn text(&self) -> &str {
        match self {
            GenerateOutcome::Preview { request, .. } => &request.prompt,
            GenerateOutcome::Completed { generation, .. } => &generation.response,
        }
    }
}

pub fn run<C: CompletionClient>(
    ctx: &AppContext<C>,
    options: GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let session_config = &ctx.config().session;
    let (category, stock) = match options.category.as_deref() {
        Some(name) => templates::get(name)?,
        None => {
            let category = session_config.category()?;
            (category, templates::stock_template(category))
        }
    };

    let template = match &options.template_file {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!(
                "Failed to read template file {}: {}",
                path.display(),
                e
            ))
        })?,
        None => stock.to_string(),
    };

    let input = GenerateInput {
        fields: options.fields,
        template,
        model: options.model.unwrap_or_else(|| session_config.default_model.clone()),
    };

    if options.prompt_preview {
        let request = prepare(&input)?;
        return Ok(GenerateOutcome::Preview { category, request });
    }

    let generation = execute(ctx.client(), ctx.api_key(), &input)?;
    Ok(GenerateOutcome::Completed { category, generation })
}

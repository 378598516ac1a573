use thiserror::Error;

use super::render::placeholder_hint;

/// Error raised while filling a template with subject fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The template names a variable that no field provides.
    #[error("Prompt formatting error: Missing variable '{name}'. Use {}.", placeholder_hint())]
    MissingField { name: String },

    /// A brace is neither part of a placeholder nor escaped.
    #[error(
        "Prompt formatting error: unmatched '{brace}' at byte {offset}. Write '{{{{' or '}}}}' for a literal brace."
    )]
    MalformedTemplate { brace: char, offset: usize },
}

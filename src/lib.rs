//! promptlab: try prompt templates for subject research against chat-completion models.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{GenerateOptions, GenerateOutcome, RuntimeOptions};
pub use domain::{AppError, Category, FieldValues, SessionState};

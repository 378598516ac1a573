pub mod api;
pub mod cli;
pub mod commands;
pub mod configuration;
mod context;

pub use context::AppContext;

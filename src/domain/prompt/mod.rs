pub mod error;
pub mod render;

pub use error::RenderError;
pub use render::{Placeholder, render};

pub mod category;
pub mod completion;
pub mod configuration;
pub mod error;
pub mod fields;
pub mod prompt;
pub mod session;
pub mod templates;

pub use category::Category;
pub use completion::{ApiKey, CompletionError, CompletionRequest};
pub use configuration::{ApiConfig, AppConfig, SessionConfig};
pub use error::AppError;
pub use fields::{Field, FieldValues};
pub use prompt::{Placeholder, RenderError};
pub use session::SessionState;

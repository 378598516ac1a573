pub mod app_config;
pub mod parse;

pub use app_config::{ApiConfig, AppConfig, SessionConfig};
pub use parse::parse_config_content;

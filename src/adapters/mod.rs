pub mod completion_client_http;
pub mod console_dialoguer;
pub mod env_credentials;

pub use completion_client_http::HttpCompletionClient;
pub use console_dialoguer::DialoguerConsole;

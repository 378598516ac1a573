mod completion_client;
mod console;

pub use completion_client::CompletionClient;
pub use console::Console;

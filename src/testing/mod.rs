mod fake_completion_client;
mod scripted_console;

pub use fake_completion_client::FakeCompletionClient;
pub use scripted_console::{ScriptedConsole, Step};

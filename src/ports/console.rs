use crate::domain::AppError;

/// Port for the interactive terminal surface.
///
/// `Ok(None)` from a prompt means the user cancelled it (Esc / Ctrl-C).
pub trait Console {
    /// Pick one of `items`, starting on `default`.
    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, AppError>;

    /// Read one line, pre-filled with `initial`. Empty input is allowed.
    fn input(&mut self, prompt: &str, initial: &str) -> Result<Option<String>, AppError>;

    /// Open `text` in an editor and return the saved result.
    fn edit(&mut self, text: &str) -> Result<Option<String>, AppError>;

    /// Ask a yes/no question. A cancel counts as no.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, AppError>;

    /// Print a message to the user.
    fn show(&mut self, message: &str);
}

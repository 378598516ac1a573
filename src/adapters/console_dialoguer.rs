use std::io::ErrorKind;

use dialoguer::{Confirm, Editor, Error as DialoguerError, Input, Select};

use crate::domain::AppError;
use crate::ports::Console;

/// Terminal console backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerConsole;

impl DialoguerConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for DialoguerConsole {
    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, AppError> {
        let result =
            Select::new().with_prompt(prompt).items(items).default(default).interact_opt();
        match result {
            Ok(choice) => Ok(choice),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::Validation(format!("Failed to read selection: {}", err))),
        }
    }

    fn input(&mut self, prompt: &str, initial: &str) -> Result<Option<String>, AppError> {
        let result = Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text();
        match result {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::Validation(format!("Failed to read {}: {}", prompt, err))),
        }
    }

    fn edit(&mut self, text: &str) -> Result<Option<String>, AppError> {
        match Editor::new().extension(".txt").require_save(true).edit(text) {
            Ok(edited) => Ok(edited),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::Validation(format!("Failed to open editor: {}", err))),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, AppError> {
        match Confirm::new().with_prompt(prompt).default(default).interact_opt() {
            Ok(answer) => Ok(answer.unwrap_or(false)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
            Err(err) => Err(AppError::Validation(format!("Failed to read answer: {}", err))),
        }
    }

    fn show(&mut self, message: &str) {
        println!("{}", message);
    }
}

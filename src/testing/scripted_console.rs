use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Console;

/// One scripted answer to a console prompt.
#[derive(Debug, Clone)]
pub enum Step {
    Select(Option<usize>),
    Input(Option<String>),
    Edit(Option<String>),
    Confirm(bool),
    /// Fail whichever prompt comes next.
    Fail(String),
}

/// Console that replays a fixed script and captures everything shown.
///
/// Once the script runs out, every select is answered with a cancel.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    steps: VecDeque<Step>,
    pub shown: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self { steps: steps.into_iter().collect(), shown: vec![], prompts: vec![] }
    }

    pub fn output(&self) -> String {
        self.shown.join("\n")
    }

    fn next(&mut self, prompt: &str) -> Option<Step> {
        self.prompts.push(prompt.to_string());
        self.steps.pop_front()
    }
}

impl Console for ScriptedConsole {
    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        _default: usize,
    ) -> Result<Option<usize>, AppError> {
        match self.next(prompt) {
            None => Ok(None),
            Some(Step::Fail(message)) => Err(AppError::Validation(message)),
            Some(Step::Select(choice)) => {
                if let Some(index) = choice {
                    assert!(index < items.len(), "scripted index {} out of range", index);
                }
                Ok(choice)
            }
            Some(other) => panic!("expected select for '{}', script had {:?}", prompt, other),
        }
    }

    fn input(&mut self, prompt: &str, _initial: &str) -> Result<Option<String>, AppError> {
        match self.next(prompt) {
            Some(Step::Input(value)) => Ok(value),
            Some(Step::Fail(message)) => Err(AppError::Validation(message)),
            other => panic!("expected input for '{}', script had {:?}", prompt, other),
        }
    }

    fn edit(&mut self, _text: &str) -> Result<Option<String>, AppError> {
        match self.next("editor") {
            Some(Step::Edit(value)) => Ok(value),
            Some(Step::Fail(message)) => Err(AppError::Validation(message)),
            other => panic!("expected edit, script had {:?}", other),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool, AppError> {
        match self.next(prompt) {
            Some(Step::Confirm(answer)) => Ok(answer),
            Some(Step::Fail(message)) => Err(AppError::Validation(message)),
            other => panic!("expected confirm for '{}', script had {:?}", prompt, other),
        }
    }

    fn show(&mut self, message: &str) {
        self.shown.push(message.to_string());
    }
}

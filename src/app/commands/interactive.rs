//! Menu-driven session loop.

use crate::app::AppContext;
use crate::app::commands::generate::{self, GenerateInput};
use crate::domain::completion::MODELS;
use crate::domain::{AppError, Category, Field, SessionState};
use crate::ports::{CompletionClient, Console};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    EditFields,
    SelectCategory,
    EditTemplate,
    SelectModel,
    ShowPrompt,
    Generate,
    Reset,
    Quit,
}

impl Action {
    const ALL: [Action; 8] = [
        Action::EditFields,
        Action::SelectCategory,
        Action::EditTemplate,
        Action::SelectModel,
        Action::ShowPrompt,
        Action::Generate,
        Action::Reset,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::EditFields => "Edit fields",
            Action::SelectCategory => "Select category",
            Action::EditTemplate => "Edit template",
            Action::SelectModel => "Select model",
            Action::ShowPrompt => "Show prompt",
            Action::Generate => "Generate",
            Action::Reset => "Reset to Default",
            Action::Quit => "Quit",
        }
    }
}

/// Drive `session` until the user quits or cancels the main menu.
///
/// Failures inside an action, console failures included, are shown and the
/// loop continues with the session intact. Only a failing main menu ends it.
pub fn run_session<C: CompletionClient, T: Console>(
    ctx: &AppContext<C>,
    session: &mut SessionState,
    console: &mut T,
) -> Result<(), AppError> {
    let items: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
    let mut last = 0;

    loop {
        console.show(&status_line(session));
        let Some(index) = console.select("What next?", &items, last)? else {
            break;
        };
        last = index;

        let action = Action::ALL[index];
        if action == Action::Quit {
            break;
        }
        if let Err(err) = perform(action, ctx, session, console) {
            tracing::warn!(error = %err, action = action.label(), "action failed");
            console.show(&format!("❌ {}", err));
        }
    }

    Ok(())
}

fn perform<C: CompletionClient, T: Console>(
    action: Action,
    ctx: &AppContext<C>,
    session: &mut SessionState,
    console: &mut T,
) -> Result<(), AppError> {
    match action {
        Action::EditFields => edit_fields(session, console)?,
        Action::SelectCategory => select_category(session, console)?,
        Action::EditTemplate => {
            if let Some(text) = console.edit(session.template())? {
                session.edit_template(text);
            }
        }
        Action::SelectModel => select_model(session, console)?,
        Action::ShowPrompt => {
            let request = generate::prepare(&GenerateInput::from_session(session))?;
            console.show(&request.prompt);
        }
        Action::Generate => {
            console.show("🤖 Generating AI response...");
            let generation = generate::submit(session, ctx.client(), ctx.api_key())?;
            console.show("✅ Response generated successfully!");
            console.show(&generation.response);
        }
        Action::Reset => {
            session.reset_template();
            console.show(&format!(
                "✅ Template reset to the default {} prompt",
                session.category()
            ));
        }
        Action::Quit => {}
    }
    Ok(())
}

fn status_line(session: &SessionState) -> String {
    let marker = if session.is_template_edited() { " (edited)" } else { "" };
    format!("Category: {}{} | Model: {}", session.category(), marker, session.model())
}

fn edit_fields<T: Console>(session: &mut SessionState, console: &mut T) -> Result<(), AppError> {
    for field in Field::ALL {
        let prompt = format!("{} (e.g. {})", field.label(), field.example());
        let current = session.fields().get(field).to_string();
        match console.input(&prompt, &current)? {
            Some(value) => session.set_field(field, value),
            None => break,
        }
    }
    Ok(())
}

fn select_category<T: Console>(
    session: &mut SessionState,
    console: &mut T,
) -> Result<(), AppError> {
    let items: Vec<String> =
        Category::ALL.iter().map(|c| c.display_name().to_string()).collect();
    let current = Category::ALL.iter().position(|c| *c == session.category()).unwrap_or(0);
    let Some(index) = console.select("Prompt category", &items, current)? else {
        return Ok(());
    };

    if session.is_template_edited()
        && !console.confirm("Discard your template edits?", false)?
    {
        return Ok(());
    }
    session.select_category(Category::ALL[index]);
    Ok(())
}

fn select_model<T: Console>(session: &mut SessionState, console: &mut T) -> Result<(), AppError> {
    let items: Vec<String> = MODELS.iter().map(|m| m.to_string()).collect();
    let current = MODELS.iter().position(|m| *m == session.model()).unwrap_or(0);
    if let Some(index) = console.select("Model", &items, current)? {
        session.select_model(MODELS[index]);
    }
    Ok(())
}

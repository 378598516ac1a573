use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::FieldValues;

use super::error::RenderError;

/// Escapes first so `{{city}}` stays literal; a lone brace is the fallback.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{[^{}]*\}|[{}]").expect("token pattern must be valid")
});

/// Variables a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    FullName,
    City,
    State,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [Placeholder::FullName, Placeholder::City, Placeholder::State];

    pub fn name(&self) -> &'static str {
        match self {
            Placeholder::FullName => "full_name",
            Placeholder::City => "city",
            Placeholder::State => "state",
        }
    }

    /// Exact, case-sensitive match on the variable name.
    pub fn from_name(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.into_iter().find(|p| p.name() == name)
    }

    fn value(&self, fields: &FieldValues) -> String {
        match self {
            Placeholder::FullName => fields.full_name(),
            Placeholder::City => fields.city().to_string(),
            Placeholder::State => fields.state().to_string(),
        }
    }
}

/// `{full_name}, {city}, {state}`, for error messages.
pub fn placeholder_hint() -> String {
    Placeholder::ALL.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}

/// Fill `template` with the subject fields.
///
/// `{full_name}`, `{city}` and `{state}` are substituted everywhere they occur,
/// `{{` and `}}` produce literal braces. Any other `{name}` fails with
/// [`RenderError::MissingField`]; a stray brace fails with
/// [`RenderError::MalformedTemplate`]. Nothing is returned on failure, so a
/// caller never sees a partially filled prompt.
pub fn render(template: &str, fields: &FieldValues) -> Result<String, RenderError> {
    let mut rendered = String::with_capacity(template.len());
    let mut cursor = 0;

    for token in TOKEN.find_iter(template) {
        rendered.push_str(&template[cursor..token.start()]);
        match token.as_str() {
            "{{" => rendered.push('{'),
            "}}" => rendered.push('}'),
            "{" => return Err(RenderError::MalformedTemplate { brace: '{', offset: token.start() }),
            "}" => return Err(RenderError::MalformedTemplate { brace: '}', offset: token.start() }),
            placeholder => {
                let name = &placeholder[1..placeholder.len() - 1];
                let placeholder = Placeholder::from_name(name)
                    .ok_or_else(|| RenderError::MissingField { name: name.to_string() })?;
                rendered.push_str(&placeholder.value(fields));
            }
        }
        cursor = token.end();
    }

    rendered.push_str(&template[cursor..]);
    Ok(rendered)
}

//! Subject fields collected from the form.

use crate::domain::AppError;

/// One named input on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    City,
    State,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::City, Field::State];

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::City => "City",
            Field::State => "State",
        }
    }

    /// Example value shown as a hint next to the input.
    pub fn example(&self) -> &'static str {
        match self {
            Field::FirstName => "John",
            Field::LastName => "Smith",
            Field::City => "Phoenix",
            Field::State => "AZ",
        }
    }
}

/// Raw values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub state: String,
}

impl FieldValues {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            city: city.into(),
            state: state.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::City => &self.city,
            Field::State => &self.state,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::City => self.city = value,
            Field::State => self.state = value,
        }
    }

    /// `first last`, each part trimmed, and the joined result trimmed again.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim()).trim().to_string()
    }

    pub fn city(&self) -> &str {
        self.city.trim()
    }

    pub fn state(&self) -> &str {
        self.state.trim()
    }

    /// Fields that are blank after trimming, in form order.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL.into_iter().filter(|field| self.get(*field).trim().is_empty()).collect()
    }

    /// Require every field to be non-blank.
    pub fn validate(&self) -> Result<(), AppError> {
        let missing = self.missing();
        if missing.is_empty() {
            return Ok(());
        }
        Err(AppError::IncompleteInput {
            missing: missing.iter().map(|field| field.label().to_string()).collect(),
        })
    }
}

//! State of one interactive session.
//!
//! Owned by the single session that mutates it; nothing here is shared or
//! persisted.

use crate::domain::completion::default_model;
use crate::domain::templates::stock_template;
use crate::domain::{Category, Field, FieldValues};

/// Form values, selected category, template text, and model.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    fields: FieldValues,
    category: Category,
    template: String,
    model: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Category::default(), default_model())
    }
}

impl SessionState {
    /// Start with empty fields and the stock template for `category`.
    pub fn new(category: Category, model: impl Into<String>) -> Self {
        Self {
            fields: FieldValues::default(),
            category,
            template: stock_template(category).to_string(),
            model: model.into(),
        }
    }

    pub fn fields(&self) -> &FieldValues {
        &self.fields
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Switch category and load its stock template, discarding any edits.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.template = stock_template(category).to_string();
    }

    pub fn edit_template(&mut self, text: impl Into<String>) {
        self.template = text.into();
    }

    /// Whether the template differs from the selected category's stock text.
    pub fn is_template_edited(&self) -> bool {
        self.template != stock_template(self.category)
    }

    /// Restore the stock template for the selected category. Fields and model are kept.
    pub fn reset_template(&mut self) {
        self.template = stock_template(self.category).to_string();
    }

    pub fn select_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }
}

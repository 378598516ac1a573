//! Read-only listings: categories, stock templates, models.

use crate::domain::completion::{MODELS, default_model};
use crate::domain::{AppError, Category, templates};

/// One row of the category listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub category: Category,
    pub is_default: bool,
}

pub fn list_categories(default: Category) -> Vec<CategoryEntry> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryEntry { category, is_default: category == default })
        .collect()
}

/// Stock template text for a category given by display name or slug.
pub fn show_template(name: &str) -> Result<(Category, &'static str), AppError> {
    templates::get(name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEntry {
    pub id: &'static str,
    pub is_default: bool,
}

/// Selectable models; `configured` marks the default when it is in the list.
pub fn list_models(configured: &str) -> Vec<ModelEntry> {
    let marked = if MODELS.contains(&configured) { configured } else { default_model() };
    MODELS.iter().map(|id| ModelEntry { id, is_default: *id == marked }).collect()
}

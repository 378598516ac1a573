//! Stock prompt templates, one per category.

use crate::domain::{AppError, Category};

mod stock {
    pub static PROFILE: &str = include_str!("../assets/templates/profile.txt");
    pub static CONSUMER_BEHAVIOR: &str = include_str!("../assets/templates/consumer_behavior.txt");
    pub static FINANCIAL: &str = include_str!("../assets/templates/financial.txt");
    pub static POLITICAL_INTERESTS: &str =
        include_str!("../assets/templates/political_interests.txt");
    pub static CHARITABLE_ACTIVITIES: &str =
        include_str!("../assets/templates/charitable_activities.txt");
    pub static SOCIAL_MEDIA: &str = include_str!("../assets/templates/social_media.txt");
    pub static NEWS: &str = include_str!("../assets/templates/news.txt");
}

/// Get the stock template for a category.
pub fn stock_template(category: Category) -> &'static str {
    match category {
        Category::Profile => stock::PROFILE,
        Category::ConsumerBehavior => stock::CONSUMER_BEHAVIOR,
        Category::Financial => stock::FINANCIAL,
        Category::PoliticalInterests => stock::POLITICAL_INTERESTS,
        Category::CharitableActivities => stock::CHARITABLE_ACTIVITIES,
        Category::SocialMedia => stock::SOCIAL_MEDIA,
        Category::News => stock::NEWS,
    }
}

/// Look up a category by name and return it with its stock template.
pub fn get(name: &str) -> Result<(Category, &'static str), AppError> {
    let category = Category::from_name(name).ok_or_else(|| AppError::CategoryNotFound {
        name: name.to_string(),
        available: Category::available(),
    })?;
    Ok((category, stock_template(category)))
}

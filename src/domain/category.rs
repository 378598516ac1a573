use std::fmt;

/// Analytical angle a stock template is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Professional biography.
    #[default]
    Profile,
    /// Spending patterns and lifestyle.
    ConsumerBehavior,
    /// Wealth indicators and giving capacity.
    Financial,
    /// Civic involvement and cause alignment.
    PoliticalInterests,
    /// Giving history and volunteer engagement.
    CharitableActivities,
    /// Platform presence and digital engagement.
    SocialMedia,
    /// Press coverage and public visibility.
    News,
}

impl Category {
    /// All categories in selector order.
    pub const ALL: [Category; 7] = [
        Category::Profile,
        Category::ConsumerBehavior,
        Category::Financial,
        Category::PoliticalInterests,
        Category::CharitableActivities,
        Category::SocialMedia,
        Category::News,
    ];

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Profile => "Profile",
            Category::ConsumerBehavior => "Consumer Behavior",
            Category::Financial => "Financial",
            Category::PoliticalInterests => "Political Interests",
            Category::CharitableActivities => "Charitable Activities",
            Category::SocialMedia => "Social Media",
            Category::News => "News",
        }
    }

    /// Stable identifier, also the asset file stem.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Profile => "profile",
            Category::ConsumerBehavior => "consumer_behavior",
            Category::Financial => "financial",
            Category::PoliticalInterests => "political_interests",
            Category::CharitableActivities => "charitable_activities",
            Category::SocialMedia => "social_media",
            Category::News => "news",
        }
    }

    /// Parse a category from its display name or slug, ignoring case and separators.
    pub fn from_name(name: &str) -> Option<Category> {
        let wanted = normalize(name);
        Category::ALL.into_iter().find(|category| normalize(category.slug()) == wanted)
    }

    /// Comma-separated display names, used in error messages.
    pub fn available() -> String {
        Category::ALL.iter().map(|c| c.display_name()).collect::<Vec<_>>().join(", ")
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_lowercase() {
        for category in Category::ALL {
            assert_eq!(category.slug(), category.slug().to_lowercase());
        }
    }

    #[test]
    fn from_name_accepts_display_names_and_slugs() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.display_name()), Some(category));
            assert_eq!(Category::from_name(category.slug()), Some(category));
        }
        assert_eq!(Category::from_name("social-media"), Some(Category::SocialMedia));
        assert_eq!(Category::from_name("  NEWS "), Some(Category::News));
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(Category::from_name("Horoscope"), None);
        assert_eq!(Category::from_name(""), None);
    }

    #[test]
    fn default_is_first_in_selector_order() {
        assert_eq!(Category::default(), Category::ALL[0]);
    }
}

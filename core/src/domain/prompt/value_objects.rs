pub const DEFAULT_LANGUAGE: &str = "english";

/// Info categories offered to clients after a detection.
///
/// Advisory only: the info prompt accepts any category string.
pub const INFO_CATEGORIES: [&str; 8] = [
    "Ingredients",
    "Calories content",
    "Health benefits",
    "Origin and history",
    "Preparation method",
    "Nutritional value",
    "Serving suggestions",
    "Allergens and dietary notes",
];

pub fn resolve_language(language: &str) -> &str {
    let language = language.trim();
    if language.is_empty() {
        DEFAULT_LANGUAGE
    } else {
        language
    }
}

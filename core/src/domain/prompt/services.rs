use crate::domain::prompt::value_objects::resolve_language;

pub struct PromptComposer;

impl PromptComposer {
    pub fn detection_prompt(language: &str) -> String {
        format!(
            "This is an image of Nigerian food. Just return the name of the food item in one or two words. \
             Don't describe, explain, or add extra text. Output in {}.",
            resolve_language(language)
        )
    }

    pub fn info_prompt(food_name: &str, info_type: &str, language: &str) -> String {
        format!(
            "Give {} information for {}, a Nigerian food. \
             Respond in a short, friendly, and clear paragraph in {}.",
            info_type,
            food_name,
            resolve_language(language)
        )
    }
}

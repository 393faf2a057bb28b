use foodvision_core::domain::{
    food_vision::entities::DetectedFood,
    prompt::value_objects::{DEFAULT_LANGUAGE, INFO_CATEGORIES},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Follow-up query. `info_type` is free text; any value is forwarded as is.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct FoodInfoRequest {
    #[serde(default)]
    #[schema(example = "Jollof rice")]
    #[validate(length(max = 200, message = "food_name must be at most 200 characters"))]
    pub food_name: Option<String>,

    #[schema(example = "Calories content")]
    #[validate(length(max = 200, message = "info_type must be at most 200 characters"))]
    pub info_type: String,

    #[serde(default = "default_language")]
    #[schema(example = "english")]
    #[validate(length(max = 50, message = "lang must be at most 50 characters"))]
    pub lang: String,
}

/// Multipart body accepted by the detection endpoints.
#[derive(Debug, ToSchema)]
pub struct DetectFoodForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    #[schema(example = "english")]
    pub lang: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectFoodResponse {
    #[schema(example = "Jollof rice")]
    pub food_name: String,
    #[schema(example = "Detected food: Jollof rice")]
    pub message: String,
    /// Info categories the client can ask about next.
    pub options: Vec<String>,
}

impl From<DetectedFood> for DetectFoodResponse {
    fn from(detected: DetectedFood) -> Self {
        Self {
            message: format!("Detected food: {}", detected.food_name),
            food_name: detected.food_name,
            options: info_categories(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InfoTypesResponse {
    pub data: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub endpoints: Vec<String>,
    pub info_types: Vec<String>,
}

pub fn info_categories() -> Vec<String> {
    INFO_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_request_defaults() {
        let request: FoodInfoRequest =
            serde_json::from_str(r#"{"info_type": "Ingredients"}"#).unwrap();
        assert_eq!(request.food_name, None);
        assert_eq!(request.lang, "english");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_info_request_accepts_any_info_type() {
        let request: FoodInfoRequest = serde_json::from_str(
            r#"{"food_name": "", "info_type": "Which aunty cooks it best", "lang": "igbo"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_info_request_rejects_oversized_fields() {
        let request = FoodInfoRequest {
            food_name: Some("x".repeat(201)),
            info_type: "Ingredients".to_string(),
            lang: default_language(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_detect_response_lists_options() {
        let response = DetectFoodResponse::from(DetectedFood {
            food_name: "Suya".to_string(),
        });
        assert_eq!(response.message, "Detected food: Suya");
        assert_eq!(response.options.len(), 8);
    }
}

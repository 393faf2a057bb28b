use std::{future::Future, path::Path};

use crate::domain::{
    common::entities::app_errors::CoreError,
    credential::value_objects::Credential,
    food_vision::{
        entities::{DetectedFood, FoodInfo},
        value_objects::{DetectFoodInput, FoodInfoInput},
    },
};

/// Multimodal model client.
///
/// The credential is passed on every call so selecting a key never mutates
/// state shared with other in-flight requests.
pub trait LLMClient: Send + Sync + 'static {
    fn generate_with_image(
        &self,
        credential: &Credential,
        prompt: String,
        image_path: &Path,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        credential: &Credential,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for food recognition and follow-up queries
pub trait FoodRecognitionService: Send + Sync {
    fn detect_food(
        &self,
        input: DetectFoodInput,
    ) -> impl Future<Output = Result<DetectedFood, CoreError>> + Send;

    fn get_food_info(
        &self,
        input: FoodInfoInput,
    ) -> impl Future<Output = Result<FoodInfo, CoreError>> + Send;
}

use crate::domain::session::value_objects::SessionScope;

#[derive(Debug, Clone)]
pub struct DetectFoodInput {
    pub image_data: Vec<u8>,
    pub language: String,
    pub scope: SessionScope,
}

#[derive(Debug, Clone)]
pub struct FoodInfoInput {
    /// Falls back to the last food detected in `scope` when blank.
    pub food_name: Option<String>,
    pub info_type: String,
    pub language: String,
    pub scope: SessionScope,
}

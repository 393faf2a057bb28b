use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DetectedFood {
    #[schema(example = "Jollof rice")]
    pub food_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodInfo {
    #[schema(example = "Jollof rice")]
    pub food_name: String,
    #[schema(example = "Calories content")]
    pub info_type: String,
    pub response: String,
}

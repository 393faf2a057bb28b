use super::handlers::{
    detect_food::{__path_detect_food, detect_food},
    get_food_info::{__path_get_food_info, get_food_info},
    list_info_types::{__path_list_info_types, list_info_types},
    welcome::{__path_welcome, welcome},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use foodvision_core::domain::food_vision::ports::FoodRecognitionService;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(welcome, detect_food, get_food_info, list_info_types))]
pub struct FoodVisionApiDoc;

pub fn food_vision_routes<S>(root_path: &str) -> Router<AppState<S>>
where
    S: FoodRecognitionService + 'static,
{
    Router::new()
        .route(&format!("{}/", root_path), get(welcome::<S>))
        .route(&format!("{}/detect", root_path), post(detect_food::<S>))
        .route(&format!("{}/detect_food", root_path), post(detect_food::<S>))
        .route(&format!("{}/food-info", root_path), post(get_food_info::<S>))
        .route(&format!("{}/food_info", root_path), post(get_food_info::<S>))
        .route(&format!("{}/info-types", root_path), get(list_info_types))
}

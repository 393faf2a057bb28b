use axum::{extract::State, http::HeaderMap};
use foodvision_core::domain::food_vision::{
    entities::FoodInfo, ports::FoodRecognitionService, value_objects::FoodInfoInput,
};

use crate::application::http::{
    food_vision::{handlers::session_scope, validators::FoodInfoRequest},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/food-info",
    tag = "food-vision",
    summary = "Get information about a food",
    description = "Answers an info category about the named food, or about the last detected one when food_name is empty. Also served at /food_info.",
    request_body = FoodInfoRequest,
    params(
        ("x-session-id" = Option<String>, Header, description = "Reads the detection made with the same session id"),
    ),
    responses(
        (status = 200, body = FoodInfo),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn get_food_info<S>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    ValidateJson(payload): ValidateJson<FoodInfoRequest>,
) -> Result<Response<FoodInfo>, ApiError>
where
    S: FoodRecognitionService + 'static,
{
    let scope = session_scope(&headers)?;

    let info = state
        .service
        .get_food_info(FoodInfoInput {
            food_name: payload.food_name,
            info_type: payload.info_type,
            language: payload.lang,
            scope,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(info))
}

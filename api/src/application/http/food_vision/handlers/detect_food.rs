use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::{HeaderMap, StatusCode},
};
use foodvision_core::domain::{
    food_vision::{ports::FoodRecognitionService, value_objects::DetectFoodInput},
    prompt::value_objects::DEFAULT_LANGUAGE,
};

use crate::application::http::{
    food_vision::{
        handlers::session_scope,
        validators::{DetectFoodForm, DetectFoodResponse},
    },
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/detect",
    tag = "food-vision",
    summary = "Detect food from image",
    description = "Names the Nigerian dish in a JPEG or PNG upload. Also served at /detect_food.",
    request_body(content = DetectFoodForm, content_type = "multipart/form-data"),
    params(
        ("x-session-id" = Option<String>, Header, description = "Keeps the detection private to this client"),
    ),
    responses(
        (status = 200, body = DetectFoodResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn detect_food<S>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Response<DetectFoodResponse>, ApiError>
where
    S: FoodRecognitionService + 'static,
{
    let scope = session_scope(&headers)?;
    let mut language: Option<String> = None;
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "lang" | "language" => {
                language = Some(field.text().await.map_err(multipart_error)?);
            }
            "image" | "file" => {
                let data = field.bytes().await.map_err(multipart_error)?;
                image_data = Some(data.to_vec());
            }
            _ => {}
        }
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let detected = state
        .service
        .detect_food(DetectFoodInput {
            image_data,
            language: language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            scope,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DetectFoodResponse::from(detected)))
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(e.body_text());
    }

    ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
}

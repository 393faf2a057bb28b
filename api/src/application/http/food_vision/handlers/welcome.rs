use axum::extract::State;

use crate::application::http::{
    food_vision::validators::{WelcomeResponse, info_categories},
    server::{api_entities::response::Response, app_state::AppState},
};

const ENDPOINTS: [(&str, &str); 6] = [
    ("POST", "/detect"),
    ("POST", "/detect_food"),
    ("POST", "/food-info"),
    ("POST", "/food_info"),
    ("GET", "/info-types"),
    ("GET", "/health/live"),
];

#[utoipa::path(
    get,
    path = "/",
    tag = "food-vision",
    summary = "Welcome",
    responses(
        (status = 200, body = WelcomeResponse)
    ),
)]
pub async fn welcome<S>(State(state): State<AppState<S>>) -> Response<WelcomeResponse>
where
    S: Send + Sync + 'static,
{
    let root_path = state.args.server.root_path.trim_end_matches('/');

    Response::OK(WelcomeResponse {
        message: format!(
            "Welcome to the Nigerian Food Vision API! Upload a food image via POST {root_path}/detect, \
             then use {root_path}/food-info with 8 options for further info."
        ),
        endpoints: ENDPOINTS
            .iter()
            .map(|(method, path)| format!("{method} {root_path}{path}"))
            .collect(),
        info_types: info_categories(),
    })
}

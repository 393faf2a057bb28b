use crate::application::http::{
    food_vision::validators::{InfoTypesResponse, info_categories},
    server::api_entities::response::Response,
};

#[utoipa::path(
    get,
    path = "/info-types",
    tag = "food-vision",
    summary = "List info categories",
    description = "The documented follow-up categories. The info endpoint accepts other values too.",
    responses(
        (status = 200, body = InfoTypesResponse)
    ),
)]
pub async fn list_info_types() -> Response<InfoTypesResponse> {
    Response::OK(InfoTypesResponse {
        data: info_categories(),
    })
}

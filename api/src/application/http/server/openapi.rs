use crate::application::http::{food_vision::router::FoodVisionApiDoc, health::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nigerian Food Vision API"
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document: the food vision routes live at the root, not under a nest prefix.
    pub fn document() -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        doc.merge(FoodVisionApiDoc::openapi());
        doc
    }
}

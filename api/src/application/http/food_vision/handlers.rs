use axum::http::HeaderMap;
use foodvision_core::domain::session::value_objects::{SESSION_HEADER, SessionScope};

use crate::application::http::server::api_entities::api_error::ApiError;

pub mod detect_food;
pub mod get_food_info;
pub mod list_info_types;
pub mod welcome;

pub(crate) fn session_scope(headers: &HeaderMap) -> Result<SessionScope, ApiError> {
    SessionScope::from_header(headers.get(SESSION_HEADER).map(|h| h.as_bytes()))
        .map_err(ApiError::from)
}

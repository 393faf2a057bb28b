use std::sync::Arc;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{
        HeaderName, HeaderValue, Method,
        header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use foodvision_core::{
    application::{FoodVisionService, create_service},
    domain::{
        common::FoodVisionConfig, food_vision::ports::FoodRecognitionService,
        session::value_objects::SESSION_HEADER,
    },
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info_span};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

use crate::{
    application::http::{
        food_vision::router::food_vision_routes,
        health::health_routes,
        server::{app_state::AppState, openapi::ApiDoc},
    },
    args::Args,
};

/// Room for multipart boundaries and the `lang` field on top of the image itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn state(args: Arc<Args>) -> Result<AppState<FoodVisionService>, anyhow::Error> {
    let config = FoodVisionConfig::from(args.as_ref().clone());
    let service = create_service(config)?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router<S>(state: AppState<S>) -> Result<Router, anyhow::Error>
where
    S: FoodRecognitionService + 'static,
{
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins)?;

    let root_path = state.args.server.root_path.trim_end_matches('/').to_string();
    let body_limit = state
        .args
        .ingest
        .max_image_size
        .saturating_add(MULTIPART_OVERHEAD);

    let mut openapi = ApiDoc::document();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", root_path), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);
    let openapi_doc = openapi.clone();

    let router = axum::Router::new()
        .merge(Scalar::with_url(format!("{}/scalar", root_path), openapi))
        .route(
            &api_docs_url,
            get(move || {
                let doc = openapi_doc.clone();
                async move { Json(doc) }
            }),
        )
        .merge(food_vision_routes::<S>(&root_path))
        .merge(health_routes::<S>(&root_path))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Ok(router)
}

/// Adds the Prometheus layer and the `/metrics` route. The exporter installs a
/// process-global recorder, so this is called once from `main`.
pub fn with_metrics(router: Router, root_path: &str) -> Router {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    router
        .route(
            &format!("{}/metrics", root_path.trim_end_matches('/')),
            get(move || async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            HeaderName::from_static(SESSION_HEADER),
        ]);

    if allowed_origins.iter().any(|origin| origin.trim() == "*") {
        debug!("Allowing any origin");
        return Ok(cors.allow_origin(Any));
    }

    let allowed_origins = allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin.trim()))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    Ok(cors.allow_origin(allowed_origins).allow_credentials(true))
}

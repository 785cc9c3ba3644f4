pub mod config;
pub mod handlers;
pub mod services;
pub mod startup;

use axum::{
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::{CorsSettings, Settings};
use services::GeoJsonSource;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub source: GeoJsonSource,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            source: GeoJsonSource::new(settings.data.path.clone()),
        }
    }
}

/// Builds the CORS layer. A `*` entry allows every origin; otherwise each
/// entry must be a valid header value.
pub fn cors_layer(cors: &CorsSettings) -> Result<CorsLayer, AppError> {
    let allow_origin = if cors.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins = cors
            .allowed_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any))
}

pub fn build_router(state: AppState, cors: &CorsSettings) -> Result<Router, AppError> {
    let app = Router::new()
        .route("/geojsondata", get(handlers::get_geojson))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .fallback(handlers::not_found)
        .with_state(state)
        // Add metrics middleware
        .layer(from_fn(metrics_middleware))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        .layer(cors_layer(cors)?);

    Ok(app)
}

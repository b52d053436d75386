// src/presentation/http/routes.rs
use crate::presentation::http::{
    controllers::{gateway, system, weather},
    middleware,
    openapi,
    state::{GatewayHttpState, WeatherHttpState},
};
use axum::{
    Extension, Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::domain::trace_id::TRACE_ID_HEADER;

pub fn build_weather_router(state: WeatherHttpState, shutdown: CancellationToken) -> Router {
    Router::new()
        .route("/openapi.json", get(openapi::serve_weather_service_openapi))
        .route("/health", get(system::health))
        .route("/weather", post(weather::get_weather))
        .layer(axum::middleware::from_fn_with_state(
            shutdown,
            middleware::request_context,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

/// `allowed_origins` holds exact origins; a lone `*` allows any origin.
pub fn build_gateway_router(
    state: GatewayHttpState,
    shutdown: CancellationToken,
    allowed_origins: &[String],
) -> Router {
    Router::new()
        .route("/openapi.json", get(openapi::serve_gateway_openapi))
        .route("/health", get(system::health))
        .route("/weather", post(gateway::forward_weather))
        .layer(axum::middleware::from_fn_with_state(
            shutdown,
            middleware::request_context,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_any = allowed_origins.is_empty() || allowed_origins.iter().any(|origin| origin == "*");
    let origins = if allow_any {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring unparsable CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(TRACE_ID_HEADER)])
        .expose_headers([HeaderName::from_static(TRACE_ID_HEADER)])
        .max_age(Duration::from_secs(3600))
}

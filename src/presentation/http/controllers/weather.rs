// src/presentation/http/controllers/weather.rs
use crate::application::{
    context::RequestContext,
    dto::{ErrorResponse, WeatherRequest, WeatherResponse},
};
use crate::domain::{ErrorCategory, ServiceError};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::JsonBody,
    state::WeatherHttpState,
};
use axum::{Extension, Json};

#[utoipa::path(
    post,
    path = "/weather",
    request_body = WeatherRequest,
    responses(
        (status = 200, description = "Current temperature for the zipcode's city", body = WeatherResponse),
        (status = 400, description = "Malformed body or unusable location", body = ErrorResponse),
        (status = 404, description = "Unknown zipcode or no weather data", body = ErrorResponse),
        (status = 422, description = "Zipcode is not eight digits", body = ErrorResponse),
        (status = 500, description = "Upstream or internal failure", body = ErrorResponse)
    ),
    tag = "Weather"
)]
pub async fn get_weather(
    Extension(state): Extension<WeatherHttpState>,
    Extension(ctx): Extension<RequestContext>,
    JsonBody(payload): JsonBody<WeatherRequest>,
) -> HttpResult<Json<WeatherResponse>> {
    state
        .weather
        .get_weather(&ctx, &payload.cep)
        .await
        .inspect_err(|err| log_failure(&ctx, err))
        .map(|reading| Json(WeatherResponse::from(reading)))
        .into_http()
}

fn log_failure(ctx: &RequestContext, err: &ServiceError) {
    let category = err.category();
    match category {
        ErrorCategory::UpstreamAuthFailure
        | ErrorCategory::UpstreamUnavailable
        | ErrorCategory::Internal => tracing::error!(
            trace_id = %ctx.trace_id(),
            category = category.as_str(),
            error = %err,
            "weather lookup failed"
        ),
        _ => tracing::warn!(
            trace_id = %ctx.trace_id(),
            category = category.as_str(),
            error = %err,
            "weather lookup rejected"
        ),
    }
}

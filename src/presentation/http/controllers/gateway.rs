// src/presentation/http/controllers/gateway.rs
use crate::application::{
    context::RequestContext,
    dto::{ErrorResponse, WeatherRequest, WeatherResponse},
    error::GatewayError,
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::JsonBody,
    state::GatewayHttpState,
};
use axum::{Extension, Json};

#[utoipa::path(
    post,
    path = "/weather",
    request_body = WeatherRequest,
    responses(
        (status = 200, description = "Weather service answer, relayed unchanged", body = WeatherResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Zipcode is not eight digits; the weather service is not called", body = ErrorResponse),
        (status = 500, description = "Weather service unreachable", body = ErrorResponse)
    ),
    tag = "Gateway"
)]
pub async fn forward_weather(
    Extension(state): Extension<GatewayHttpState>,
    Extension(ctx): Extension<RequestContext>,
    JsonBody(payload): JsonBody<WeatherRequest>,
) -> HttpResult<Json<WeatherResponse>> {
    state
        .gateway
        .get_weather(&ctx, &payload.cep)
        .await
        .inspect_err(|err| match err {
            GatewayError::Transport(_) => {
                tracing::error!(trace_id = %ctx.trace_id(), error = %err, "weather service unreachable");
            }
            _ => tracing::warn!(trace_id = %ctx.trace_id(), error = %err, "gateway request failed"),
        })
        .map(Json)
        .into_http()
}

// tests/support/helpers.rs
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, Response, StatusCode, header::CONTENT_TYPE};
use cep_weather::application::{
    ports::{
        LocationResolverPort, TemperatureResolverPort, TracerPort, WeatherLookupPort,
        WeatherServiceClientPort,
    },
    services::{EdgeGateway, WeatherOrchestrator},
};
use cep_weather::domain::trace_id::TRACE_ID_HEADER;
use cep_weather::infrastructure::{
    HttpWeatherServiceClient, TracingTracer, ViaCepClient, WeatherApiClient,
};
use cep_weather::presentation::http::{
    routes::{build_gateway_router, build_weather_router},
    state::{GatewayHttpState, WeatherHttpState},
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub const TEST_API_KEY: &str = "test-weather-key";

pub fn tracer() -> Arc<TracerPort> {
    Arc::new(TracingTracer::new("test"))
}

/// Weather service router over arbitrary resolvers.
pub fn weather_router_with(
    locations: Arc<LocationResolverPort>,
    temperatures: Arc<TemperatureResolverPort>,
) -> Router {
    let weather: Arc<WeatherLookupPort> =
        Arc::new(WeatherOrchestrator::new(locations, temperatures, tracer()));
    build_weather_router(WeatherHttpState { weather }, CancellationToken::new())
}

/// Weather service router wired to real HTTP adapters pointing at the given
/// (usually wiremock) base URLs.
pub fn weather_router_against(viacep_url: &str, weather_api_url: &str) -> Router {
    let locations = ViaCepClient::new(viacep_url, Duration::from_secs(2), tracer())
        .expect("geocoding client");
    let temperatures =
        WeatherApiClient::new(weather_api_url, TEST_API_KEY, Duration::from_secs(2), tracer())
            .expect("weather client");
    weather_router_with(Arc::new(locations), Arc::new(temperatures))
}

pub fn gateway_router_with(client: Arc<WeatherServiceClientPort>) -> Router {
    gateway_router_with_shutdown(client, CancellationToken::new())
}

/// Gateway router whose request contexts are children of `shutdown`.
pub fn gateway_router_with_shutdown(
    client: Arc<WeatherServiceClientPort>,
    shutdown: CancellationToken,
) -> Router {
    let gateway = Arc::new(EdgeGateway::new(client, tracer()));
    build_gateway_router(GatewayHttpState { gateway }, shutdown, &["*".to_string()])
}

pub fn weather_service_client(weather_service_url: &str) -> HttpWeatherServiceClient {
    HttpWeatherServiceClient::new(weather_service_url, Duration::from_secs(2))
        .expect("weather service client")
}

pub fn gateway_router_against(weather_service_url: &str) -> Router {
    gateway_router_with(Arc::new(weather_service_client(weather_service_url)))
}

pub fn weather_request(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/weather")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn weather_request_traced(body: impl Into<String>, trace_id: &str) -> Request<Body> {
    let mut req = weather_request(body);
    req.headers_mut()
        .insert(TRACE_ID_HEADER, trace_id.parse().unwrap());
    req
}

pub fn cep_body(cep: &str) -> String {
    serde_json::json!({ "cep": cep }).to_string()
}

pub async fn read_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert that a response is an `ErrorResponse` JSON with the expected status and message.
pub async fn assert_error_response(resp: Response<Body>, status: StatusCode, message: &str) {
    assert_eq!(resp.status(), status);
    let json = read_json(resp).await;
    assert_eq!(json, serde_json::json!({ "message": message }));
}

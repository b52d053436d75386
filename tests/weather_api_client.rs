use cep_weather::application::{
    context::RequestContext,
    ports::{TracerPort, weather::TemperatureResolver},
};
use cep_weather::domain::{Location, ServiceError, TraceId};
use cep_weather::infrastructure::{WeatherApiClient, weather_api::FETCH_WEATHER_SPAN};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;

use support::{RecordingTracer, TEST_API_KEY, TraceEvent};

fn client(base_url: &str, tracer: Arc<RecordingTracer>) -> WeatherApiClient {
    client_with_timeout(base_url, tracer, Duration::from_secs(2))
}

fn client_with_timeout(
    base_url: &str,
    tracer: Arc<RecordingTracer>,
    timeout: Duration,
) -> WeatherApiClient {
    WeatherApiClient::new(base_url, TEST_API_KEY, timeout, tracer as Arc<TracerPort>).unwrap()
}

async fn slow_server(delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "current": { "temp_c": 25.5 } }))
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    server
}

async fn answering(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn sends_country_qualified_query_and_records_location() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("key", TEST_API_KEY))
        .and(query_param("q", "São Paulo, SP, Brazil"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "current": { "temp_c": 21.0 } })))
        .expect(1)
        .mount(&server)
        .await;
    let tracer = Arc::new(RecordingTracer::default());

    let celsius = client(&server.uri(), Arc::clone(&tracer))
        .resolve(&RequestContext::detached(), &Location::new("São Paulo", "SP"))
        .await;

    assert_eq!(celsius, Ok(21.0));
    assert_eq!(
        tracer.events(),
        vec![
            TraceEvent::Span(FETCH_WEATHER_SPAN),
            TraceEvent::Attribute("location", "São Paulo/SP".into()),
        ]
    );
}

#[tokio::test]
async fn upstream_statuses_map_to_categories() {
    let cases = [
        (401, ServiceError::UpstreamAuthFailure),
        (400, ServiceError::WeatherNotFound),
        (403, ServiceError::UpstreamUnavailable { status: 403 }),
        (502, ServiceError::UpstreamUnavailable { status: 502 }),
    ];

    for (status, expected) in cases {
        let server = answering(status, json!({ "error": { "message": "nope" } })).await;
        let tracer = Arc::new(RecordingTracer::default());

        let result = client(&server.uri(), Arc::clone(&tracer))
            .resolve(&RequestContext::detached(), &Location::new("Belford Roxo", "RJ"))
            .await;

        assert_eq!(result, Err(expected.clone()), "status {status}");
        assert_eq!(tracer.errors(), vec![expected.to_string()]);
    }
}

#[tokio::test]
async fn missing_temperature_is_internal() {
    let server = answering(200, json!({ "current": {} })).await;

    let err = client(&server.uri(), Arc::default())
        .resolve(&RequestContext::detached(), &Location::new("Belford Roxo", "RJ"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Internal(_)));
}

#[tokio::test]
async fn transport_errors_never_expose_the_api_key() {
    let err = client("http://127.0.0.1:9", Arc::default())
        .resolve(&RequestContext::detached(), &Location::new("Belford Roxo", "RJ"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Internal(_)));
    assert!(!err.to_string().contains(TEST_API_KEY));
}

#[tokio::test]
async fn whitespace_city_is_still_sent_to_the_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("q", "  , RJ, Brazil"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server.uri(), Arc::default())
        .resolve(&RequestContext::detached(), &Location::new("  ", "RJ"))
        .await;

    assert_eq!(result, Err(ServiceError::WeatherNotFound));
}

#[tokio::test]
async fn answer_slower_than_timeout_is_internal() {
    let server = slow_server(Duration::from_secs(5)).await;

    let started = tokio::time::Instant::now();
    let err = client_with_timeout(&server.uri(), Arc::default(), Duration::from_secs(1))
        .resolve(&RequestContext::detached(), &Location::new("Belford Roxo", "RJ"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Internal(_)), "{err:?}");
    assert!(started.elapsed() < Duration::from_secs(4));
    assert!(!err.to_string().contains(TEST_API_KEY));
}

#[tokio::test]
async fn cancelled_request_stops_waiting() {
    let server = slow_server(Duration::from_secs(10)).await;
    let token = CancellationToken::new();
    let ctx = RequestContext::new(TraceId::generate(), token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });
    let result = tokio::time::timeout(
        Duration::from_secs(1),
        client(&server.uri(), Arc::default()).resolve(&ctx, &Location::new("Belford Roxo", "RJ")),
    )
    .await
    .expect("cancellation should end the lookup promptly");
    canceller.await.unwrap();

    assert_eq!(result, Err(ServiceError::internal("request cancelled")));
}

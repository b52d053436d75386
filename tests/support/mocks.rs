// tests/support/mocks.rs
use async_trait::async_trait;
use cep_weather::application::{
    context::RequestContext,
    dto::WeatherResponse,
    error::GatewayResult,
    ports::{
        geocoding::LocationResolver, telemetry::Tracer, weather::TemperatureResolver,
        weather_service::WeatherServiceClient,
    },
};
use cep_weather::domain::{DomainResult, Location, TraceId};
use std::error::Error;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::Span;

pub struct StubLocationResolver {
    result: DomainResult<Location>,
    calls: AtomicUsize,
}

impl StubLocationResolver {
    pub fn returning(result: DomainResult<Location>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationResolver for StubLocationResolver {
    async fn resolve(&self, _ctx: &RequestContext, _zipcode: &str) -> DomainResult<Location> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

pub struct StubTemperatureResolver {
    result: DomainResult<f64>,
    seen: Mutex<Vec<Location>>,
}

impl StubTemperatureResolver {
    pub fn returning(result: DomainResult<f64>) -> Self {
        Self {
            result,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn seen(&self) -> Vec<Location> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl TemperatureResolver for StubTemperatureResolver {
    async fn resolve(&self, _ctx: &RequestContext, location: &Location) -> DomainResult<f64> {
        self.seen.lock().unwrap().push(location.clone());
        self.result.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    Span(&'static str),
    Attribute(&'static str, String),
    Error(String),
}

/// Tracer that only remembers what it was asked to record, in order.
#[derive(Default)]
pub struct RecordingTracer {
    events: Mutex<Vec<TraceEvent>>,
}

impl RecordingTracer {
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn span_names(&self) -> Vec<&'static str> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                TraceEvent::Span(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                TraceEvent::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl Tracer for RecordingTracer {
    fn start_span(&self, _ctx: &RequestContext, name: &'static str) -> Span {
        self.events.lock().unwrap().push(TraceEvent::Span(name));
        Span::none()
    }

    fn record_attribute(&self, _span: &Span, key: &'static str, value: &str) {
        self.events
            .lock()
            .unwrap()
            .push(TraceEvent::Attribute(key, value.to_string()));
    }

    fn record_error(&self, _span: &Span, error: &(dyn Error + 'static)) {
        self.events
            .lock()
            .unwrap()
            .push(TraceEvent::Error(error.to_string()));
    }
}

pub struct StubWeatherServiceClient {
    result: GatewayResult<WeatherResponse>,
    trace_ids: Mutex<Vec<TraceId>>,
}

impl StubWeatherServiceClient {
    pub fn returning(result: GatewayResult<WeatherResponse>) -> Self {
        Self {
            result,
            trace_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.trace_ids.lock().unwrap().len()
    }

    pub fn trace_ids(&self) -> Vec<TraceId> {
        self.trace_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherServiceClient for StubWeatherServiceClient {
    async fn fetch_weather(
        &self,
        ctx: &RequestContext,
        _zipcode: &str,
    ) -> GatewayResult<WeatherResponse> {
        self.trace_ids.lock().unwrap().push(ctx.trace_id());
        self.result.clone()
    }
}

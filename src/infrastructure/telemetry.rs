// src/infrastructure/telemetry.rs
use crate::application::{context::RequestContext, ports::telemetry::Tracer};
use crate::config::LogFormat;
use std::error::Error;
use tracing::{Span, field};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// `Tracer` backed by `tracing` spans. Every span carries the service name
/// and the request's trace id; attributes must be one of the declared
/// fields (`zipcode`, `location`, `error`) or they are dropped.
#[derive(Debug, Clone)]
pub struct TracingTracer {
    service: String,
}

impl TracingTracer {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

impl Tracer for TracingTracer {
    fn start_span(&self, ctx: &RequestContext, name: &'static str) -> Span {
        tracing::info_span!(
            "phase",
            otel.name = name,
            service = %self.service,
            trace_id = %ctx.trace_id(),
            zipcode = field::Empty,
            location = field::Empty,
            error = field::Empty,
        )
    }

    fn record_attribute(&self, span: &Span, key: &'static str, value: &str) {
        span.record(key, value);
    }

    fn record_error(&self, span: &Span, error: &(dyn Error + 'static)) {
        span.record("error", field::display(error));
        tracing::warn!(parent: span, error = %error, "phase failed");
    }
}

pub fn init_tracing(format: LogFormat) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(env_filter));

    let initialised = match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    if initialised.is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

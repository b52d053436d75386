// src/application/ports/telemetry.rs
use crate::application::context::RequestContext;
use std::error::Error;
use tracing::Span;

/// Span factory handed to every resolver and use case at construction time.
pub trait Tracer: Send + Sync {
    fn start_span(&self, ctx: &RequestContext, name: &'static str) -> Span;

    /// Attaches `key=value` to `span`. Never affects control flow.
    fn record_attribute(&self, span: &Span, key: &'static str, value: &str);

    fn record_error(&self, span: &Span, error: &(dyn Error + 'static));
}

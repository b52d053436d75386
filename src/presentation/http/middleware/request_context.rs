// src/presentation/http/middleware/request_context.rs
use crate::application::context::RequestContext;
use crate::domain::trace_id::{TRACE_ID_HEADER, TraceId};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// Attach a [`RequestContext`] to every request.
///
/// An inbound `trace-id` header is adopted when it parses as a UUID, otherwise
/// a fresh id is generated. The request's cancellation token is a child of the
/// server's shutdown token and the trace id is echoed on the response.
pub async fn request_context(
    State(shutdown): State<CancellationToken>,
    mut req: Request,
    next: Next,
) -> Response {
    let trace_id = inbound_trace_id(req.headers()).unwrap_or_else(TraceId::generate);
    let ctx = RequestContext::new(trace_id, shutdown.child_token());
    req.extensions_mut().insert(ctx);

    let span = tracing::info_span!("request", trace_id = %trace_id);
    let mut response = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&trace_id.to_string()) {
        response.headers_mut().insert(TRACE_ID_HEADER, value);
    }
    response
}

fn inbound_trace_id(headers: &HeaderMap) -> Option<TraceId> {
    headers
        .get(TRACE_ID_HEADER)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

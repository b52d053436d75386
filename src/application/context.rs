// src/application/context.rs
use crate::domain::{DomainResult, ServiceError, TraceId};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Per-request state handed to every port call: the correlation id and the
/// cancellation signal that aborts in-flight outbound work.
#[derive(Debug, Clone)]
pub struct RequestContext {
    trace_id: TraceId,
    cancellation: CancellationToken,
}

impl RequestContext {
    pub fn new(trace_id: TraceId, cancellation: CancellationToken) -> Self {
        Self {
            trace_id,
            cancellation,
        }
    }

    /// Context with a fresh trace id and a token nobody else can cancel.
    pub fn detached() -> Self {
        Self::new(TraceId::generate(), CancellationToken::new())
    }

    pub fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Drives `fut` unless the context is cancelled first, in which case the
    /// future is dropped and its result discarded.
    pub async fn run_until_cancelled<T, F>(&self, fut: F) -> DomainResult<T>
    where
        F: Future<Output = DomainResult<T>>,
    {
        tokio::select! {
            biased;
            () = self.cancellation.cancelled() => Err(ServiceError::internal("request cancelled")),
            result = fut => result,
        }
    }
}

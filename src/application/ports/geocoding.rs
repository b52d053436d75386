// src/application/ports/geocoding.rs
use crate::application::context::RequestContext;
use crate::domain::{DomainResult, Location};
use async_trait::async_trait;

/// Resolves a raw zipcode into the city and state it belongs to.
///
/// Implementations validate the zipcode before doing any I/O and report
/// `InvalidZipcode`, `ZipcodeNotFound` or `Internal`.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve(&self, ctx: &RequestContext, zipcode: &str) -> DomainResult<Location>;
}

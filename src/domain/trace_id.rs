//! Correlation identifier that follows one request across both services.
//!
//! The identifier travels explicitly inside the request context and in the
//! `trace-id` HTTP header between the edge gateway and the weather service.

use std::{fmt, str::FromStr};
use uuid::Uuid;

pub const TRACE_ID_HEADER: &str = "trace-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

// src/domain/mod.rs
pub mod errors;
pub mod trace_id;
pub mod weather;
pub mod zipcode;

pub use errors::{DomainResult, ErrorCategory, ServiceError};
pub use trace_id::TraceId;
pub use weather::{Location, WeatherReading};
pub use zipcode::Zipcode;

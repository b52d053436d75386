// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, ServiceError>;

/// Closed set of failure categories a weather lookup can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    InvalidZipcode,
    ZipcodeNotFound,
    InvalidLocation,
    WeatherNotFound,
    UpstreamAuthFailure,
    UpstreamUnavailable,
    Internal,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::InvalidZipcode => "invalid_zipcode",
            ErrorCategory::ZipcodeNotFound => "zipcode_not_found",
            ErrorCategory::InvalidLocation => "invalid_location",
            ErrorCategory::WeatherNotFound => "weather_not_found",
            ErrorCategory::UpstreamAuthFailure => "upstream_auth_failure",
            ErrorCategory::UpstreamUnavailable => "upstream_unavailable",
            ErrorCategory::Internal => "internal",
        }
    }
}

/// Failure raised where it is detected and carried unchanged to the HTTP
/// boundary. Compared structurally, never by identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("invalid zipcode")]
    InvalidZipcode,
    #[error("can not find zipcode")]
    ZipcodeNotFound,
    #[error("invalid location")]
    InvalidLocation,
    #[error("weather not found")]
    WeatherNotFound,
    #[error("weather provider rejected the API key")]
    UpstreamAuthFailure,
    #[error("weather provider unavailable: status {status}")]
    UpstreamUnavailable { status: u16 },
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ServiceError::InvalidZipcode => ErrorCategory::InvalidZipcode,
            ServiceError::ZipcodeNotFound => ErrorCategory::ZipcodeNotFound,
            ServiceError::InvalidLocation => ErrorCategory::InvalidLocation,
            ServiceError::WeatherNotFound => ErrorCategory::WeatherNotFound,
            ServiceError::UpstreamAuthFailure => ErrorCategory::UpstreamAuthFailure,
            ServiceError::UpstreamUnavailable { .. } => ErrorCategory::UpstreamUnavailable,
            ServiceError::Internal(_) => ErrorCategory::Internal,
        }
    }

    /// Human readable description, suitable for logs and spans.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

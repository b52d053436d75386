// src/application/error.rs
use crate::domain::errors::ServiceError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ServiceError>;
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Outcome of a failed edge gateway request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Rejected locally before any network hop.
    #[error(transparent)]
    Rejected(#[from] ServiceError),

    /// The weather service answered with a non-success status; relayed as is.
    #[error("weather service responded {status}: {message}")]
    Downstream { status: u16, message: String },

    #[error("weather service call failed: {0}")]
    Transport(String),
}

impl GatewayError {
    pub fn downstream(status: u16, message: impl Into<String>) -> Self {
        Self::Downstream {
            status,
            message: message.into(),
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

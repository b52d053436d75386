// src/presentation/http/error.rs
use crate::application::{
    ApplicationResult, GatewayResult, dto::ErrorResponse, error::GatewayError,
};
use crate::domain::errors::ServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";
pub const INVALID_BODY_MESSAGE: &str = "invalid request body";

/// The only place where error categories turn into status codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidZipcode => Self::new(StatusCode::UNPROCESSABLE_ENTITY, err.message()),
            ServiceError::ZipcodeNotFound | ServiceError::WeatherNotFound => {
                Self::new(StatusCode::NOT_FOUND, err.message())
            }
            ServiceError::InvalidLocation => Self::new(StatusCode::BAD_REQUEST, err.message()),
            // Upstream wording stays in the logs.
            ServiceError::UpstreamAuthFailure
            | ServiceError::UpstreamUnavailable { .. }
            | ServiceError::Internal(_) => Self::internal(),
        }
    }

    pub fn from_gateway_error(err: GatewayError) -> Self {
        match err {
            GatewayError::Rejected(inner) => Self::from_error(inner),
            GatewayError::Downstream { status, message } => match StatusCode::from_u16(status) {
                Ok(status) => Self::new(status, message),
                Err(_) => Self::internal(),
            },
            GatewayError::Transport(_) => Self::internal(),
        }
    }

    pub fn invalid_body() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE.into())
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.into())
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

impl<T> IntoHttpResult<T> for GatewayResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_gateway_error)
    }
}

// src/application/dto.rs
use crate::domain::WeatherReading;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inbound body of `POST /weather` on both services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeatherRequest {
    /// Eight digit zipcode, without hyphen.
    #[serde(default, alias = "zipcode")]
    #[schema(example = "26140040")]
    pub cep: String,
}

impl WeatherRequest {
    pub fn new(cep: impl Into<String>) -> Self {
        Self { cep: cep.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherResponse {
    #[schema(example = "Belford Roxo")]
    pub city: String,
    #[serde(rename = "temp_C")]
    #[schema(example = 25.5)]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    #[schema(example = 77.9)]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    #[schema(example = 298.5)]
    pub temp_k: f64,
}

/// Error body shared by both services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "invalid zipcode")]
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<WeatherReading> for WeatherResponse {
    fn from(reading: WeatherReading) -> Self {
        Self {
            city: reading.city,
            temp_c: reading.temp_c,
            temp_f: reading.temp_f,
            temp_k: reading.temp_k,
        }
    }
}

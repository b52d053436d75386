// src/infrastructure/mod.rs
pub mod http_client;
pub mod telemetry;
pub mod viacep;
pub mod weather_api;
pub mod weather_service_client;

pub use telemetry::{TracingTracer, init_tracing};
pub use viacep::ViaCepClient;
pub use weather_api::WeatherApiClient;
pub use weather_service_client::HttpWeatherServiceClient;

// src/application/ports/mod.rs
pub mod geocoding;
pub mod telemetry;
pub mod weather;
pub mod weather_service;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type LocationResolverPort = dyn geocoding::LocationResolver;
pub type TemperatureResolverPort = dyn weather::TemperatureResolver;
pub type WeatherLookupPort = dyn weather::WeatherLookup;
pub type WeatherServiceClientPort = dyn weather_service::WeatherServiceClient;
pub type TracerPort = dyn telemetry::Tracer;

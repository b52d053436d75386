// src/application/ports/weather.rs
use crate::application::context::RequestContext;
use crate::domain::{DomainResult, Location, WeatherReading};
use async_trait::async_trait;

/// Looks up the current temperature, in Celsius, for a resolved location.
#[async_trait]
pub trait TemperatureResolver: Send + Sync {
    async fn resolve(&self, ctx: &RequestContext, location: &Location) -> DomainResult<f64>;
}

/// Full zipcode to weather lookup, as exposed by the weather service.
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn get_weather(&self, ctx: &RequestContext, zipcode: &str)
    -> DomainResult<WeatherReading>;
}

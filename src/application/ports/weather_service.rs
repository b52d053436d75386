// src/application/ports/weather_service.rs
use crate::application::{context::RequestContext, dto::WeatherResponse, error::GatewayResult};
use async_trait::async_trait;

/// Network client the edge gateway uses to reach the weather service.
#[async_trait]
pub trait WeatherServiceClient: Send + Sync {
    async fn fetch_weather(
        &self,
        ctx: &RequestContext,
        zipcode: &str,
    ) -> GatewayResult<WeatherResponse>;
}

// src/application/services/weather.rs
use crate::application::{
    context::RequestContext,
    error::ApplicationResult,
    ports::{
        LocationResolverPort, TemperatureResolverPort, TracerPort, weather::WeatherLookup,
    },
};
use crate::domain::{ServiceError, WeatherReading, zipcode};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::Instrument;

pub const PROCESS_WEATHER_SPAN: &str = "weather-service.process-weather";

/// Zipcode -> location -> temperature -> reading, stopping at the first
/// failure and returning it untouched. Malformed zipcodes never reach the
/// geocoder.
pub struct WeatherOrchestrator {
    locations: Arc<LocationResolverPort>,
    temperatures: Arc<TemperatureResolverPort>,
    tracer: Arc<TracerPort>,
}

impl WeatherOrchestrator {
    pub fn new(
        locations: Arc<LocationResolverPort>,
        temperatures: Arc<TemperatureResolverPort>,
        tracer: Arc<TracerPort>,
    ) -> Self {
        Self {
            locations,
            temperatures,
            tracer,
        }
    }

    pub async fn get_weather(
        &self,
        ctx: &RequestContext,
        zipcode: &str,
    ) -> ApplicationResult<WeatherReading> {
        let span = self.tracer.start_span(ctx, PROCESS_WEATHER_SPAN);

        let result: ApplicationResult<WeatherReading> = async {
            zipcode::validate(zipcode)?;
            let location = self.locations.resolve(ctx, zipcode).await?;
            let celsius = self.temperatures.resolve(ctx, &location).await?;
            Ok::<_, ServiceError>(WeatherReading::from_celsius(location.city(), celsius))
        }
        .instrument(span.clone())
        .await;

        if let Err(err) = &result {
            self.tracer.record_error(&span, err);
        }
        result
    }
}

#[async_trait]
impl WeatherLookup for WeatherOrchestrator {
    async fn get_weather(
        &self,
        ctx: &RequestContext,
        zipcode: &str,
    ) -> ApplicationResult<WeatherReading> {
        WeatherOrchestrator::get_weather(self, ctx, zipcode).await
    }
}

// src/application/services/gateway.rs
use crate::application::{
    context::RequestContext,
    dto::WeatherResponse,
    error::{GatewayError, GatewayResult},
    ports::{TracerPort, WeatherServiceClientPort},
};
use crate::domain::zipcode;
use std::sync::Arc;
use tracing::Instrument;

pub const VALIDATE_INPUT_SPAN: &str = "edge-gateway.validate-input";
pub const CALL_WEATHER_SERVICE_SPAN: &str = "edge-gateway.call-weather-service";

/// Client-facing half of the system: rejects malformed zipcodes locally and
/// forwards everything else to the weather service.
pub struct EdgeGateway {
    weather_service: Arc<WeatherServiceClientPort>,
    tracer: Arc<TracerPort>,
}

impl EdgeGateway {
    pub fn new(weather_service: Arc<WeatherServiceClientPort>, tracer: Arc<TracerPort>) -> Self {
        Self {
            weather_service,
            tracer,
        }
    }

    pub async fn get_weather(
        &self,
        ctx: &RequestContext,
        zipcode: &str,
    ) -> GatewayResult<WeatherResponse> {
        {
            let span = self.tracer.start_span(ctx, VALIDATE_INPUT_SPAN);
            if let Err(err) = zipcode::validate(zipcode) {
                self.tracer.record_error(&span, &err);
                return Err(GatewayError::Rejected(err));
            }
        }

        let span = self.tracer.start_span(ctx, CALL_WEATHER_SERVICE_SPAN);
        let result = self
            .weather_service
            .fetch_weather(ctx, zipcode)
            .instrument(span.clone())
            .await;

        if let Err(err) = &result {
            self.tracer.record_error(&span, err);
        }
        result
    }
}

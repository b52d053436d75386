//! Reqwest-backed temperature adapter for WeatherAPI.com.
//!
//! Only the upstream status decides the error category:
//! 401 -> auth failure, 400 -> weather not found, other non-200 -> unavailable.
//! The body of a non-200 answer is never read.

use crate::application::{
    context::RequestContext,
    ports::{TracerPort, weather::TemperatureResolver},
};
use crate::domain::{DomainResult, Location, ServiceError};
use crate::infrastructure::http_client::{build_client, describe_transport_error, trim_base_url};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::{sync::Arc, time::Duration};
use tracing::Instrument;

pub const FETCH_WEATHER_SPAN: &str = "weather-service.fetch-weather";

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_c: f64,
}

pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: String,
    tracer: Arc<TracerPort>,
}

impl WeatherApiClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
        tracer: Arc<TracerPort>,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: trim_base_url(base_url),
            api_key: api_key.into(),
            tracer,
        })
    }

    fn current_url(&self, location: &Location) -> DomainResult<String> {
        let query = location.weather_query();
        let params = serde_urlencoded::to_string([
            ("key", self.api_key.as_str()),
            ("q", query.as_str()),
            ("aqi", "no"),
        ])
        .map_err(|err| ServiceError::internal(format!("encoding weather query: {err}")))?;
        Ok(format!("{}/current.json?{params}", self.base_url))
    }

    async fn lookup(&self, ctx: &RequestContext, location: &Location) -> DomainResult<f64> {
        if location.city().is_empty() {
            return Err(ServiceError::InvalidLocation);
        }
        let url = self.current_url(location)?;

        let body = ctx
            .run_until_cancelled(async {
                let response = self.client.get(&url).send().await.map_err(query_failed)?;
                check_status(response.status())?;
                response.bytes().await.map_err(query_failed)
            })
            .await?;

        celsius_from_body(&body)
    }
}

/// Only the status decides the category; the body is read for 200 alone.
fn check_status(status: StatusCode) -> DomainResult<()> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::UNAUTHORIZED => Err(ServiceError::UpstreamAuthFailure),
        StatusCode::BAD_REQUEST => Err(ServiceError::WeatherNotFound),
        other => Err(ServiceError::UpstreamUnavailable {
            status: other.as_u16(),
        }),
    }
}

fn celsius_from_body(body: &Bytes) -> DomainResult<f64> {
    let decoded: CurrentWeatherResponse = serde_json::from_slice(body)
        .map_err(|err| ServiceError::internal(format!("invalid weather payload: {err}")))?;
    Ok(decoded.current.temp_c)
}

fn query_failed(err: reqwest::Error) -> ServiceError {
    ServiceError::internal(format!(
        "querying weather provider: {}",
        describe_transport_error(err)
    ))
}

#[async_trait]
impl TemperatureResolver for WeatherApiClient {
    async fn resolve(&self, ctx: &RequestContext, location: &Location) -> DomainResult<f64> {
        let span = self.tracer.start_span(ctx, FETCH_WEATHER_SPAN);
        self.tracer
            .record_attribute(&span, "location", &location.to_string());

        let result = self.lookup(ctx, location).instrument(span.clone()).await;
        if let Err(err) = &result {
            self.tracer.record_error(&span, err);
        }
        result
    }
}

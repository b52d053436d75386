//! HTTP client the edge gateway uses to reach the weather service.
//!
//! Non-success answers are relayed as `GatewayError::Downstream` with the
//! remote status and message untouched; nothing is re-classified here.

use crate::application::{
    context::RequestContext,
    dto::{ErrorResponse, WeatherRequest, WeatherResponse},
    error::{GatewayError, GatewayResult},
    ports::weather_service::WeatherServiceClient,
};
use crate::domain::trace_id::TRACE_ID_HEADER;
use crate::infrastructure::http_client::{build_client, describe_transport_error, trim_base_url};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub struct HttpWeatherServiceClient {
    client: Client,
    base_url: String,
}

impl HttpWeatherServiceClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: trim_base_url(base_url),
        })
    }

    async fn exchange(
        &self,
        ctx: &RequestContext,
        zipcode: &str,
    ) -> Result<(StatusCode, Bytes), reqwest::Error> {
        let response = self
            .client
            .post(format!("{}/weather", self.base_url))
            .header(TRACE_ID_HEADER, ctx.trace_id().to_string())
            .json(&WeatherRequest::new(zipcode))
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok((status, body))
    }
}

fn relay(status: StatusCode, body: &[u8]) -> GatewayResult<WeatherResponse> {
    if status != StatusCode::OK {
        let message = serde_json::from_slice::<ErrorResponse>(body)
            .map(|error| error.message)
            .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned());
        return Err(GatewayError::downstream(status.as_u16(), message));
    }

    serde_json::from_slice(body).map_err(|err| {
        GatewayError::transport(format!("invalid weather service payload: {err}"))
    })
}

#[async_trait]
impl WeatherServiceClient for HttpWeatherServiceClient {
    async fn fetch_weather(
        &self,
        ctx: &RequestContext,
        zipcode: &str,
    ) -> GatewayResult<WeatherResponse> {
        let outcome = tokio::select! {
            biased;
            () = ctx.cancellation().cancelled() => {
                return Err(GatewayError::transport("request cancelled"));
            }
            outcome = self.exchange(ctx, zipcode) => outcome,
        };

        let (status, body) = outcome.map_err(|err| {
            GatewayError::transport(format!(
                "calling weather service: {}",
                describe_transport_error(err)
            ))
        })?;
        relay(status, &body)
    }
}

//! Reqwest-backed geocoder adapter for the ViaCEP API.
//!
//! `GET {base}/{12345-678}/json/` answers `{"localidade", "uf", "erro"?}`.
//! An `erro` flag or an empty `localidade` means the zipcode is unknown.

use crate::application::{
    context::RequestContext,
    ports::{TracerPort, geocoding::LocationResolver},
};
use crate::domain::{DomainResult, Location, ServiceError, Zipcode};
use crate::infrastructure::http_client::{build_client, describe_transport_error, trim_base_url};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::{sync::Arc, time::Duration};
use tracing::Instrument;

pub const FETCH_ZIPCODE_SPAN: &str = "weather-service.fetch-zipcode";

#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default)]
    erro: Option<ErroFlag>,
}

// ViaCEP has answered both `"erro": "true"` and `"erro": true` over time.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErroFlag {
    Bool(bool),
    Text(String),
}

impl ErroFlag {
    fn is_set(&self) -> bool {
        match self {
            ErroFlag::Bool(flag) => *flag,
            ErroFlag::Text(text) => text.eq_ignore_ascii_case("true"),
        }
    }
}

impl ViaCepResponse {
    fn into_location(self) -> DomainResult<Location> {
        let not_found = self.erro.as_ref().is_some_and(ErroFlag::is_set);
        if not_found || self.localidade.is_empty() {
            return Err(ServiceError::ZipcodeNotFound);
        }
        Ok(Location::new(self.localidade, self.uf))
    }
}

pub struct ViaCepClient {
    client: Client,
    base_url: String,
    tracer: Arc<TracerPort>,
}

impl ViaCepClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        tracer: Arc<TracerPort>,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: trim_base_url(base_url),
            tracer,
        })
    }

    async fn lookup(&self, ctx: &RequestContext, zipcode: &str) -> DomainResult<Location> {
        let zipcode = Zipcode::parse(zipcode)?;
        let url = format!("{}/{}/json/", self.base_url, zipcode.hyphenated());

        let body = ctx
            .run_until_cancelled(async {
                let response = self
                    .client
                    .get(&url)
                    .send()
                    .await
                    .map_err(query_failed)?;
                response.bytes().await.map_err(query_failed)
            })
            .await?;

        let decoded: ViaCepResponse = serde_json::from_slice(&body).map_err(|err| {
            ServiceError::internal(format!("invalid geocoder payload: {err}"))
        })?;
        decoded.into_location()
    }
}

fn query_failed(err: reqwest::Error) -> ServiceError {
    ServiceError::internal(format!(
        "querying geocoder: {}",
        describe_transport_error(err)
    ))
}

#[async_trait]
impl LocationResolver for ViaCepClient {
    async fn resolve(&self, ctx: &RequestContext, zipcode: &str) -> DomainResult<Location> {
        let span = self.tracer.start_span(ctx, FETCH_ZIPCODE_SPAN);
        self.tracer.record_attribute(&span, "zipcode", zipcode);

        let result = self.lookup(ctx, zipcode).instrument(span.clone()).await;
        if let Err(err) = &result {
            self.tracer.record_error(&span, err);
        }
        result
    }
}

use cep_weather::application::{
    ports::{LocationResolverPort, TemperatureResolverPort, TracerPort, WeatherLookupPort},
    services::WeatherOrchestrator,
};
use cep_weather::config::{LogFormat, WeatherServiceConfig};
use cep_weather::infrastructure::{TracingTracer, ViaCepClient, WeatherApiClient, init_tracing};
use cep_weather::presentation::http::{
    routes::build_weather_router,
    server::{serve, shutdown_signal},
    state::WeatherHttpState,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(LogFormat::from_env());

    let config = WeatherServiceConfig::from_env()?;
    tracing::debug!(?config, "weather service configuration loaded");

    let tracer: Arc<TracerPort> = Arc::new(TracingTracer::new(config.service_name()));
    let locations: Arc<LocationResolverPort> = Arc::new(
        ViaCepClient::new(
            config.viacep_base_url(),
            config.geocoding_timeout(),
            Arc::clone(&tracer),
        )
        .context("building geocoding client")?,
    );
    let temperatures: Arc<TemperatureResolverPort> = Arc::new(
        WeatherApiClient::new(
            config.weather_api_base_url(),
            config.weather_api_key(),
            config.weather_timeout(),
            Arc::clone(&tracer),
        )
        .context("building weather client")?,
    );
    let weather: Arc<WeatherLookupPort> = Arc::new(WeatherOrchestrator::new(
        locations,
        temperatures,
        Arc::clone(&tracer),
    ));

    let shutdown = CancellationToken::new();
    let app = build_weather_router(WeatherHttpState { weather }, shutdown.clone());

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;

    tokio::spawn(shutdown_signal(shutdown.clone()));
    serve(listener, app, shutdown, config.shutdown_grace()).await?;
    tracing::info!("weather service stopped");
    Ok(())
}

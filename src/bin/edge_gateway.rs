use cep_weather::application::{
    ports::{TracerPort, WeatherServiceClientPort},
    services::EdgeGateway,
};
use cep_weather::config::{GatewayConfig, LogFormat};
use cep_weather::infrastructure::{HttpWeatherServiceClient, TracingTracer, init_tracing};
use cep_weather::presentation::http::{
    routes::build_gateway_router,
    server::{serve, shutdown_signal},
    state::GatewayHttpState,
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

    let config = GatewayConfig::from_env()?;
    tracing::debug!(?config, "edge gateway configuration loaded");

    let tracer: Arc<TracerPort> = Arc::new(TracingTracer::new(config.service_name()));
    let weather_service: Arc<WeatherServiceClientPort> = Arc::new(
        HttpWeatherServiceClient::new(
            config.weather_service_url(),
            config.weather_service_timeout(),
        )
        .context("building weather service client")?,
    );
    let gateway = Arc::new(EdgeGateway::new(weather_service, tracer));

    let shutdown = CancellationToken::new();
    let app = build_gateway_router(
        GatewayHttpState { gateway },
        shutdown.clone(),
        config.allowed_origins(),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;

    tokio::spawn(shutdown_signal(shutdown.clone()));
    serve(listener, app, shutdown, config.shutdown_grace()).await?;
    tracing::info!("edge gateway stopped");
    Ok(())
}

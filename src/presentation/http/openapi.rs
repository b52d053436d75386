// src/presentation/http/openapi.rs
use std::{
    collections::HashSet,
    env,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi};

pub const DEFAULT_SNAPSHOT_DIR: &str = "openapi";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::weather::get_weather,
        crate::presentation::http::controllers::system::health
    ),
    components(
        schemas(
            crate::application::dto::WeatherRequest,
            crate::application::dto::WeatherResponse,
            crate::application::dto::ErrorResponse,
            crate::presentation::http::controllers::system::StatusResponse
        )
    ),
    tags(
        (name = "Weather", description = "Zipcode to temperature lookup"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&WeatherServiceServers),
    info(
        title = "Weather Service",
        description = "Resolves a Brazilian zipcode to its city and current temperature",
        version = "0.1.0"
    )
)]
pub struct WeatherServiceApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::gateway::forward_weather,
        crate::presentation::http::controllers::system::health
    ),
    components(
        schemas(
            crate::application::dto::WeatherRequest,
            crate::application::dto::WeatherResponse,
            crate::application::dto::ErrorResponse,
            crate::presentation::http::controllers::system::StatusResponse
        )
    ),
    tags(
        (name = "Gateway", description = "Client-facing zipcode validation and forwarding"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&GatewayServers),
    info(
        title = "Edge Gateway",
        description = "Validates zipcodes and forwards them to the weather service",
        version = "0.1.0"
    )
)]
pub struct GatewayApiDoc;

struct WeatherServiceServers;

impl Modify for WeatherServiceServers {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        apply_servers(openapi, "http://localhost:8081");
    }
}

struct GatewayServers;

impl Modify for GatewayServers {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        apply_servers(openapi, "http://localhost:8080");
    }
}

/// Servers come from the comma separated `PUBLIC_API_URLS`; the local
/// listener URL is always listed.
fn apply_servers(openapi: &mut utoipa::openapi::OpenApi, local: &str) {
    let configured = env::var("PUBLIC_API_URLS").ok();
    let urls = configured
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|segment| segment.trim().trim_end_matches('/'))
        .filter(|segment| !segment.is_empty())
        .chain(std::iter::once(local));

    let servers = openapi.servers.get_or_insert_with(Vec::new);
    servers.clear();
    let mut seen = HashSet::new();
    for url in urls {
        if seen.insert(url) {
            servers.push(Server::new(url));
        }
    }
}

pub async fn serve_weather_service_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(WeatherServiceApiDoc::openapi())
}

pub async fn serve_gateway_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(GatewayApiDoc::openapi())
}

/// Write both documents as pretty JSON into `OPENAPI_SNAPSHOT_DIR`
/// (default `openapi/`) and return the written paths.
pub fn write_openapi_snapshot() -> std::io::Result<Vec<PathBuf>> {
    let dir = env::var("OPENAPI_SNAPSHOT_DIR").unwrap_or_else(|_| DEFAULT_SNAPSHOT_DIR.to_string());
    let dir = Path::new(&dir);
    std::fs::create_dir_all(dir)?;

    let documents = [
        ("weather-service.json", WeatherServiceApiDoc::openapi()),
        ("edge-gateway.json", GatewayApiDoc::openapi()),
    ];

    let mut written = Vec::with_capacity(documents.len());
    for (file_name, spec) in documents {
        let path = dir.join(file_name);
        let writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(writer, &spec)?;
        written.push(path);
    }
    Ok(written)
}

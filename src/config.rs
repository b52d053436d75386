// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: Option<String>) -> Result<Self, ConfigError> {
        match value.as_deref().map(str::trim) {
            None | Some("") => Ok(Self::Text),
            Some(v) if v.eq_ignore_ascii_case("text") || v.eq_ignore_ascii_case("pretty") => {
                Ok(Self::Text)
            }
            Some(v) if v.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(other) => Err(ConfigError::Invalid(format!(
                "LOG_FORMAT must be `text` or `json`, got `{other}`"
            ))),
        }
    }

    /// Reads `LOG_FORMAT` before the rest of the configuration so that
    /// configuration errors themselves are logged in the right format.
    pub fn from_env() -> Self {
        Self::parse(env::var("LOG_FORMAT").ok()).unwrap_or_default()
    }
}

const DEFAULT_WEATHER_SERVICE_ADDR: &str = "0.0.0.0:8081";
const DEFAULT_GATEWAY_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_WEATHER_API_BASE_URL: &str = "https://api.weatherapi.com/v1";
const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br/ws";
const DEFAULT_WEATHER_SERVICE_URL: &str = "http://localhost:8081";
const DEFAULT_OUTBOUND_TIMEOUT_SECS: u64 = 5;
const DEFAULT_WEATHER_SERVICE_TIMEOUT_SECS: u64 = 15;
const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;
// Geocoding and weather lookups must stay in the single-digit seconds.
const MAX_OUTBOUND_TIMEOUT_SECS: u64 = 9;

/// Settings of the backend weather service binary.
#[derive(Clone)]
pub struct WeatherServiceConfig {
    listen_addr: String,
    service_name: String,
    weather_api_key: String,
    weather_api_base_url: String,
    viacep_base_url: String,
    geocoding_timeout: Duration,
    weather_timeout: Duration,
    shutdown_grace: Duration,
}

impl std::fmt::Debug for WeatherServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherServiceConfig")
            .field("listen_addr", &self.listen_addr)
            .field("service_name", &self.service_name)
            .field("weather_api_key", &"<redacted>")
            .field("weather_api_base_url", &self.weather_api_base_url)
            .field("viacep_base_url", &self.viacep_base_url)
            .field("geocoding_timeout", &self.geocoding_timeout)
            .field("weather_timeout", &self.weather_timeout)
            .field("shutdown_grace", &self.shutdown_grace)
            .finish()
    }
}

impl WeatherServiceConfig {
    /// Build configuration from environment variables, after letting a
    /// `.env` file populate them.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let weather_api_key = lookup("WEATHER_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing("WEATHER_API_KEY"))?;

        Ok(Self {
            listen_addr: listen_addr(&lookup, DEFAULT_WEATHER_SERVICE_ADDR)?,
            service_name: lookup("SERVICE_NAME").unwrap_or_else(|| "weather-service".into()),
            weather_api_key,
            weather_api_base_url: base_url(
                &lookup,
                "WEATHER_API_BASE_URL",
                DEFAULT_WEATHER_API_BASE_URL,
            )?,
            viacep_base_url: base_url(&lookup, "VIACEP_BASE_URL", DEFAULT_VIACEP_BASE_URL)?,
            geocoding_timeout: outbound_timeout(&lookup, "GEOCODING_TIMEOUT_SECS")?,
            weather_timeout: outbound_timeout(&lookup, "WEATHER_TIMEOUT_SECS")?,
            shutdown_grace: seconds(&lookup, "SHUTDOWN_GRACE_SECS", DEFAULT_SHUTDOWN_GRACE_SECS)?,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn weather_api_key(&self) -> &str {
        &self.weather_api_key
    }

    pub fn weather_api_base_url(&self) -> &str {
        &self.weather_api_base_url
    }

    pub fn viacep_base_url(&self) -> &str {
        &self.viacep_base_url
    }

    pub fn geocoding_timeout(&self) -> Duration {
        self.geocoding_timeout
    }

    pub fn weather_timeout(&self) -> Duration {
        self.weather_timeout
    }

    pub fn shutdown_grace(&self) -> Duration {
        self.shutdown_grace
    }
}

/// Settings of the edge gateway binary.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    listen_addr: String,
    service_name: String,
    weather_service_url: String,
    weather_service_timeout: Duration,
    allowed_origins: Vec<String>,
    shutdown_grace: Duration,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| vec!["*".to_string()]);

        Ok(Self {
            listen_addr: listen_addr(&lookup, DEFAULT_GATEWAY_ADDR)?,
            service_name: lookup("SERVICE_NAME").unwrap_or_else(|| "edge-gateway".into()),
            weather_service_url: base_url(
                &lookup,
                "WEATHER_SERVICE_URL",
                DEFAULT_WEATHER_SERVICE_URL,
            )?,
            weather_service_timeout: seconds(
                &lookup,
                "WEATHER_SERVICE_TIMEOUT_SECS",
                DEFAULT_WEATHER_SERVICE_TIMEOUT_SECS,
            )?,
            allowed_origins,
            shutdown_grace: seconds(&lookup, "SHUTDOWN_GRACE_SECS", DEFAULT_SHUTDOWN_GRACE_SECS)?,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn weather_service_url(&self) -> &str {
        &self.weather_service_url
    }

    pub fn weather_service_timeout(&self) -> Duration {
        self.weather_service_timeout
    }

    /// Return the allowed CORS origins; `*` means any origin.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn shutdown_grace(&self) -> Duration {
        self.shutdown_grace
    }
}

/// `LISTEN_ADDR` wins; otherwise `PORT` replaces the port of the default.
fn listen_addr(
    lookup: &impl Fn(&str) -> Option<String>,
    default: &str,
) -> Result<String, ConfigError> {
    if let Some(addr) = lookup("LISTEN_ADDR").filter(|a| !a.trim().is_empty()) {
        return Ok(addr.trim().to_string());
    }
    match lookup("PORT") {
        Some(port) => {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("PORT must be a port number, got `{port}`")))?;
            let host = default.rsplit_once(':').map_or(default, |(host, _)| host);
            Ok(format!("{host}:{port}"))
        }
        None => Ok(default.to_string()),
    }
}

fn base_url(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<String, ConfigError> {
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    let parsed = reqwest::Url::parse(raw.trim())
        .map_err(|err| ConfigError::Invalid(format!("{key} is not a valid URL: {err}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid(format!("{key} must use http or https")));
    }
    Ok(raw.trim().trim_end_matches('/').to_string())
}

fn seconds(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: u64,
) -> Result<Duration, ConfigError> {
    let secs = match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a whole number of seconds")))?,
        None => default,
    };
    Ok(Duration::from_secs(secs))
}

fn outbound_timeout(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Duration, ConfigError> {
    let timeout = seconds(lookup, key, DEFAULT_OUTBOUND_TIMEOUT_SECS)?;
    if timeout.is_zero() || timeout.as_secs() > MAX_OUTBOUND_TIMEOUT_SECS {
        return Err(ConfigError::Invalid(format!(
            "{key} must be between 1 and {MAX_OUTBOUND_TIMEOUT_SECS} seconds"
        )));
    }
    Ok(timeout)
}

// src/presentation/http/state.rs
use crate::application::{ports::WeatherLookupPort, services::EdgeGateway};
use std::sync::Arc;

#[derive(Clone)]
pub struct WeatherHttpState {
    pub weather: Arc<WeatherLookupPort>,
}

#[derive(Clone)]
pub struct GatewayHttpState {
    pub gateway: Arc<EdgeGateway>,
}

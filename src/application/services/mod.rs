// src/application/services/mod.rs
pub mod gateway;
pub mod weather;

pub use gateway::EdgeGateway;
pub use weather::WeatherOrchestrator;

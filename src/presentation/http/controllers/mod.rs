// src/presentation/http/controllers/mod.rs
pub mod gateway;
pub mod system;
pub mod weather;

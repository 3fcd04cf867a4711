// src/handlers/mod.rs
// PURPOSE: Route registration for the read-only HTTP surface

pub mod health;
pub mod photos;

pub use health::config as health_config;
pub use photos::config as photos_config;

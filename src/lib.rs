// src/lib.rs
// DOCUMENTATION: Photo metadata query layer
// PURPOSE: Expose modules to the server binary and integration tests

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;

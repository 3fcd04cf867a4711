// src/services/mod.rs
// PURPOSE: Query shaping, statistics and validated persistence

pub mod photo_query_service;
pub mod photo_service;
pub mod statistics;

pub use photo_query_service::*;
pub use photo_service::*;
pub use statistics::*;

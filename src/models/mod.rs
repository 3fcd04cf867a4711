// src/models/mod.rs
// PURPOSE: Photo rows, request bodies and response DTOs

pub mod photo;

pub use photo::*;

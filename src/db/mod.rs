// src/db/mod.rs
// PURPOSE: SQL access to the photos table

pub mod photo_repository;

pub use photo_repository::*;

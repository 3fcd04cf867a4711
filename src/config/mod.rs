// src/config/mod.rs
// PURPOSE: Environment configuration and the Postgres pool it drives

pub mod db;
pub mod env;

pub use db::init_db_pool;
pub use env::Config;

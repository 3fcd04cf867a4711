// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for the photo query layer

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every query failure surfaces as one of these variants
/// Empty result sets are never errors
#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("Photo not found with id: {0}")]
    NotFound(String),

    #[error("Storage unreachable: {0}")]
    Connectivity(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl PhotoError {
    /// Classify a sqlx failure
    /// Pool exhaustion, closed pools and transport errors mean the store is unreachable
    pub fn from_sqlx(context: &str, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => PhotoError::Connectivity(format!("{}: {}", context, err)),
            other => PhotoError::Database(format!("{}: {}", context, other)),
        }
    }
}

/// Convert PhotoError to HTTP response
impl ResponseError for PhotoError {
    fn error_response(&self) -> HttpResponse {
        let error_code = match self {
            PhotoError::NotFound(_) => "NOT_FOUND",
            PhotoError::Connectivity(_) => "CONNECTIVITY_ERROR",
            PhotoError::Database(_) => "DATABASE_ERROR",
            PhotoError::InvalidParameter(_) => "INVALID_PARAMETER",
            PhotoError::Validation(_) => "VALIDATION_ERROR",
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PhotoError::NotFound(_) => StatusCode::NOT_FOUND,
            PhotoError::Connectivity(_) => StatusCode::SERVICE_UNAVAILABLE,
            PhotoError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PhotoError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            PhotoError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

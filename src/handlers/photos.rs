// src/handlers/photos.rs
// DOCUMENTATION: HTTP handlers for photo queries
// PURPOSE: Parse query strings, call services, return JSON

use crate::errors::PhotoError;
use crate::models::{Photo, PhotoResponse, PhotoStatisticsResponse};
use crate::services::{PhotoQueryService, PhotoService};
use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDateTime;
use serde::Deserialize;
use sqlx::PgPool;

/// `?uploaded_at=2024-03-01T10:15:00`
#[derive(Debug, Deserialize)]
pub struct CursorQuery {
    pub uploaded_at: NaiveDateTime,
}

/// `?year=2024&month=03`
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: String,
    pub month: String,
}

/// `?start_row=1&end_row=20`
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub start_row: i64,
    pub end_row: i64,
}

/// GET /photos
pub async fn list_photos(pool: web::Data<PgPool>) -> Result<impl Responder, PhotoError> {
    let photos = PhotoQueryService::list_all_descending(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(to_responses(&photos)))
}

/// GET /photos/before
pub async fn photos_before(
    pool: web::Data<PgPool>,
    query: web::Query<CursorQuery>,
) -> Result<impl Responder, PhotoError> {
    let photos = PhotoQueryService::find_before(pool.get_ref(), query.uploaded_at).await?;
    Ok(HttpResponse::Ok().json(to_responses(&photos)))
}

/// GET /photos/after
pub async fn photos_after(
    pool: web::Data<PgPool>,
    query: web::Query<CursorQuery>,
) -> Result<impl Responder, PhotoError> {
    let photos = PhotoQueryService::find_after(pool.get_ref(), query.uploaded_at).await?;
    Ok(HttpResponse::Ok().json(to_responses(&photos)))
}

/// GET /photos/month
pub async fn photos_by_month(
    pool: web::Data<PgPool>,
    query: web::Query<MonthQuery>,
) -> Result<impl Responder, PhotoError> {
    let photos =
        PhotoQueryService::find_by_month(pool.get_ref(), &query.year, &query.month).await?;
    Ok(HttpResponse::Ok().json(to_responses(&photos)))
}

/// GET /photos/page
pub async fn photos_page(
    pool: web::Data<PgPool>,
    query: web::Query<PageQuery>,
) -> Result<impl Responder, PhotoError> {
    let photos =
        PhotoQueryService::paginate(pool.get_ref(), query.start_row, query.end_row).await?;
    Ok(HttpResponse::Ok().json(to_responses(&photos)))
}

/// GET /photos/statistics
pub async fn photo_statistics(pool: web::Data<PgPool>) -> Result<impl Responder, PhotoError> {
    let stats = PhotoQueryService::statistics_overview(pool.get_ref()).await?;
    let body: Vec<PhotoStatisticsResponse> = stats.iter().map(|s| s.to_response()).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /photos/{id}
pub async fn get_photo(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<impl Responder, PhotoError> {
    let photo = PhotoService::get_photo(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(photo.to_response()))
}

fn to_responses(photos: &[Photo]) -> Vec<PhotoResponse> {
    photos.iter().map(|p| p.to_response()).collect()
}

/// Configuration for photo routes
pub fn config(cfg: &mut web::ServiceConfig) {
    // Malformed query strings surface as InvalidParameter instead of actix's plain-text 400
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| PhotoError::InvalidParameter(err.to_string()).into());

    cfg.service(
        web::scope("/photos")
            .app_data(query_config)
            .route("", web::get().to(list_photos))
            .route("/before", web::get().to(photos_before))
            .route("/after", web::get().to(photos_after))
            .route("/month", web::get().to(photos_by_month))
            .route("/page", web::get().to(photos_page))
            .route("/statistics", web::get().to(photo_statistics))
            .route("/{id}", web::get().to(get_photo)),
    );
}

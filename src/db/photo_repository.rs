// src/db/photo_repository.rs
// DOCUMENTATION: Photo database operations
// PURPOSE: Every SQL statement against the photos table lives here

use crate::errors::PhotoError;
use crate::models::{Photo, UpdatePhotoRequest};
use chrono::NaiveDateTime;
use sqlx::PgPool;

/// Maximum rows returned by `find_uploaded_before`
pub const BEFORE_PAGE_SIZE: i64 = 10;

/// Substituted for a NULL file_path by `find_uploaded_after` only
pub const DEFAULT_FILE_PATH: &str = "default_path";

pub struct PhotoRepository;

impl PhotoRepository {
    /// All photos, newest first
    pub async fn find_all_order_by_uploaded_at_desc(
        pool: &PgPool,
    ) -> Result<Vec<Photo>, PhotoError> {
        sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, original_file_name, photo_data, stored_file_name, file_path,
                   file_size, mime_type, uploaded_at, width, height
            FROM photos
            ORDER BY uploaded_at DESC
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list photos: {}", e);
            PhotoError::from_sqlx("List photos failed", e)
        })
    }

    /// All photos, oldest first
    /// DOCUMENTATION: Input order for the running-total pass of the statistics query
    pub async fn find_all_order_by_uploaded_at_asc(
        pool: &PgPool,
    ) -> Result<Vec<Photo>, PhotoError> {
        sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, original_file_name, photo_data, stored_file_name, file_path,
                   file_size, mime_type, uploaded_at, width, height
            FROM photos
            ORDER BY uploaded_at ASC
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list photos for statistics: {}", e);
            PhotoError::from_sqlx("List photos failed", e)
        })
    }

    /// The BEFORE_PAGE_SIZE most recent photos strictly older than `uploaded_at`
    pub async fn find_uploaded_before(
        pool: &PgPool,
        uploaded_at: NaiveDateTime,
    ) -> Result<Vec<Photo>, PhotoError> {
        sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, original_file_name, photo_data, stored_file_name, file_path,
                   file_size, mime_type, uploaded_at, width, height
            FROM photos
            WHERE uploaded_at < $1
            ORDER BY uploaded_at DESC
            LIMIT $2
            "#,
        )
        .bind(uploaded_at)
        .bind(BEFORE_PAGE_SIZE)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch photos before {}: {}", uploaded_at, e);
            PhotoError::from_sqlx("Fetch previous photos failed", e)
        })
    }

    /// Every photo strictly newer than `uploaded_at`, oldest first
    /// DOCUMENTATION: Unbounded, and the only query that repairs a NULL file_path
    pub async fn find_uploaded_after(
        pool: &PgPool,
        uploaded_at: NaiveDateTime,
    ) -> Result<Vec<Photo>, PhotoError> {
        sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, original_file_name, photo_data, stored_file_name,
                   COALESCE(file_path, $2) AS file_path,
                   file_size, mime_type, uploaded_at, width, height
            FROM photos
            WHERE uploaded_at > $1
            ORDER BY uploaded_at ASC
            "#,
        )
        .bind(uploaded_at)
        .bind(DEFAULT_FILE_PATH)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch photos after {}: {}", uploaded_at, e);
            PhotoError::from_sqlx("Fetch next photos failed", e)
        })
    }

    /// Photos in the half-open interval `[from, until)`, newest first
    pub async fn find_uploaded_between(
        pool: &PgPool,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> Result<Vec<Photo>, PhotoError> {
        sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, original_file_name, photo_data, stored_file_name, file_path,
                   file_size, mime_type, uploaded_at, width, height
            FROM photos
            WHERE uploaded_at >= $1 AND uploaded_at < $2
            ORDER BY uploaded_at DESC
            "#,
        )
        .bind(from)
        .bind(until)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch photos between {} and {}: {}", from, until, e);
            PhotoError::from_sqlx("Fetch photos by month failed", e)
        })
    }

    /// A window of the newest-first listing
    pub async fn find_page(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Photo>, PhotoError> {
        sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, original_file_name, photo_data, stored_file_name, file_path,
                   file_size, mime_type, uploaded_at, width, height
            FROM photos
            ORDER BY uploaded_at DESC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch page (offset {}, limit {}): {}", offset, limit, e);
            PhotoError::from_sqlx("Fetch photo page failed", e)
        })
    }

    /// Insert a photo row
    /// DOCUMENTATION: Rows normally arrive from the upload pipeline; this is the generic create
    pub async fn create_photo(pool: &PgPool, photo: &Photo) -> Result<Photo, PhotoError> {
        let created = sqlx::query_as::<_, Photo>(
            r#"
            INSERT INTO photos (
                id, original_file_name, photo_data, stored_file_name, file_path,
                file_size, mime_type, uploaded_at, width, height
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, original_file_name, photo_data, stored_file_name, file_path,
                      file_size, mime_type, uploaded_at, width, height
            "#,
        )
        .bind(&photo.id)
        .bind(&photo.original_file_name)
        .bind(&photo.photo_data)
        .bind(&photo.stored_file_name)
        .bind(&photo.file_path)
        .bind(photo.file_size)
        .bind(&photo.mime_type)
        .bind(photo.uploaded_at)
        .bind(photo.width)
        .bind(photo.height)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create photo {}: {}", photo.id, e);
            PhotoError::from_sqlx("Create photo failed", e)
        })?;

        log::info!("Created photo with id: {}", created.id);
        Ok(created)
    }

    pub async fn get_by_id(pool: &PgPool, id: &str) -> Result<Photo, PhotoError> {
        sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, original_file_name, photo_data, stored_file_name, file_path,
                   file_size, mime_type, uploaded_at, width, height
            FROM photos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching photo: {}", e);
            PhotoError::from_sqlx("Fetch photo failed", e)
        })?
        .ok_or_else(|| {
            log::warn!("Photo not found: {}", id);
            PhotoError::NotFound(id.to_string())
        })
    }

    /// Partial update, absent fields keep their stored value
    pub async fn update_photo(
        pool: &PgPool,
        id: &str,
        req: &UpdatePhotoRequest,
    ) -> Result<Photo, PhotoError> {
        let updated = sqlx::query_as::<_, Photo>(
            r#"
            UPDATE photos
            SET original_file_name = COALESCE($1, original_file_name),
                stored_file_name = COALESCE($2, stored_file_name),
                file_path = COALESCE($3, file_path),
                file_size = COALESCE($4, file_size),
                mime_type = COALESCE($5, mime_type),
                width = COALESCE($6, width),
                height = COALESCE($7, height)
            WHERE id = $8
            RETURNING id, original_file_name, photo_data, stored_file_name, file_path,
                      file_size, mime_type, uploaded_at, width, height
            "#,
        )
        .bind(&req.original_file_name)
        .bind(&req.stored_file_name)
        .bind(&req.file_path)
        .bind(req.file_size)
        .bind(&req.mime_type)
        .bind(req.width)
        .bind(req.height)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for photo {}: {}", id, e);
            PhotoError::from_sqlx("Update photo failed", e)
        })?
        .ok_or_else(|| PhotoError::NotFound(id.to_string()))?;

        log::info!("Updated photo: {}", id);
        Ok(updated)
    }

    pub async fn delete_photo(pool: &PgPool, id: &str) -> Result<(), PhotoError> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete photo {}: {}", id, e);
                PhotoError::from_sqlx("Delete photo failed", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(PhotoError::NotFound(id.to_string()));
        }

        log::info!("Deleted photo: {}", id);
        Ok(())
    }

    pub async fn count(pool: &PgPool) -> Result<i64, PhotoError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM photos")
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to count photos: {}", e);
                PhotoError::from_sqlx("Count photos failed", e)
            })?;

        Ok(total)
    }
}

// src/services/photo_service.rs
// DOCUMENTATION: Generic persistence operations for photo rows
// PURPOSE: Validate requests before they reach the repository

use crate::db::PhotoRepository;
use crate::errors::PhotoError;
use crate::models::{CreatePhotoRequest, Photo, UpdatePhotoRequest};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct PhotoService;

impl PhotoService {
    /// Create a photo row, generating the id and timestamp when absent
    pub async fn create_photo(pool: &PgPool, req: CreatePhotoRequest) -> Result<Photo, PhotoError> {
        let photo = Self::resolve(req)?;
        PhotoRepository::create_photo(pool, &photo).await
    }

    pub async fn get_photo(pool: &PgPool, id: &str) -> Result<Photo, PhotoError> {
        PhotoRepository::get_by_id(pool, id).await
    }

    pub async fn update_photo(
        pool: &PgPool,
        id: &str,
        req: UpdatePhotoRequest,
    ) -> Result<Photo, PhotoError> {
        req.validate()
            .map_err(|e| PhotoError::Validation(e.to_string()))?;
        PhotoRepository::update_photo(pool, id, &req).await
    }

    pub async fn delete_photo(pool: &PgPool, id: &str) -> Result<(), PhotoError> {
        PhotoRepository::delete_photo(pool, id).await
    }

    pub async fn count_photos(pool: &PgPool) -> Result<i64, PhotoError> {
        PhotoRepository::count(pool).await
    }

    fn resolve(req: CreatePhotoRequest) -> Result<Photo, PhotoError> {
        req.validate()
            .map_err(|e| PhotoError::Validation(e.to_string()))?;

        Ok(Photo {
            id: req.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            original_file_name: req.original_file_name,
            photo_data: req.photo_data,
            stored_file_name: req.stored_file_name,
            file_path: req.file_path,
            file_size: req.file_size,
            mime_type: req.mime_type,
            uploaded_at: req.uploaded_at.unwrap_or_else(|| Utc::now().naive_utc()),
            width: req.width,
            height: req.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreatePhotoRequest {
        CreatePhotoRequest {
            id: None,
            original_file_name: "IMG_0001.HEIC".to_string(),
            photo_data: None,
            stored_file_name: "b1946ac9.heic".to_string(),
            file_path: None,
            file_size: 1_048_576,
            mime_type: "image/heic".to_string(),
            uploaded_at: None,
            width: 4032,
            height: 3024,
        }
    }

    #[test]
    fn test_resolve_generates_id_and_timestamp() {
        let before = Utc::now().naive_utc();
        let photo = PhotoService::resolve(request()).unwrap();

        assert!(Uuid::parse_str(&photo.id).is_ok());
        assert!(photo.uploaded_at >= before);
        assert_eq!(photo.file_path, None);
    }

    #[test]
    fn test_resolve_keeps_supplied_id() {
        let mut req = request();
        req.id = Some("photo-42".to_string());

        let photo = PhotoService::resolve(req).unwrap();
        assert_eq!(photo.id, "photo-42");
    }

    #[test]
    fn test_resolve_rejects_negative_dimensions() {
        let mut req = request();
        req.height = -1;

        assert!(matches!(
            PhotoService::resolve(req),
            Err(PhotoError::Validation(_))
        ));
    }
}

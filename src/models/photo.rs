// src/models/photo.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Uploaded photo metadata
/// DOCUMENTATION: Maps directly to the photos table; uploaded_at is the only ordering key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Photo {
    pub id: String,
    pub original_file_name: String,
    /// Inline binary payload, absent when the file lives on disk only
    pub photo_data: Option<Vec<u8>>,
    pub stored_file_name: String,
    pub file_path: Option<String>,
    pub file_size: i64,
    pub mime_type: String,
    pub uploaded_at: NaiveDateTime,
    pub width: i32,
    pub height: i32,
}

/// Photo with size ranking and cumulative storage usage
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoStatistics {
    pub photo: Photo,
    /// RANK() over file_size descending; ties share a rank
    pub size_rank: i64,
    /// Sum of file_size for this row and every row uploaded before it
    pub running_total: i64,
}

/// Statistics DTO for API responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoStatisticsResponse {
    #[serde(flatten)]
    pub photo: PhotoResponse,
    pub size_rank: i64,
    pub running_total: i64,
}

impl PhotoStatistics {
    pub fn to_response(&self) -> PhotoStatisticsResponse {
        PhotoStatisticsResponse {
            photo: self.photo.to_response(),
            size_rank: self.size_rank,
            running_total: self.running_total,
        }
    }
}

/// Request to create a new photo row
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePhotoRequest {
    /// Generated when omitted
    #[validate(length(min = 1, max = 36))]
    pub id: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub original_file_name: String,

    pub photo_data: Option<Vec<u8>>,

    #[validate(length(min = 1, max = 255))]
    pub stored_file_name: String,

    #[validate(length(max = 500))]
    pub file_path: Option<String>,

    #[validate(range(min = 0))]
    pub file_size: i64,

    #[validate(length(min = 1, max = 50))]
    pub mime_type: String,

    /// Defaults to the current time
    pub uploaded_at: Option<NaiveDateTime>,

    #[validate(range(min = 0))]
    pub width: i32,

    #[validate(range(min = 0))]
    pub height: i32,
}

/// Partial update; only present fields are written
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePhotoRequest {
    #[validate(length(min = 1, max = 255))]
    pub original_file_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub stored_file_name: Option<String>,

    #[validate(length(max = 500))]
    pub file_path: Option<String>,

    #[validate(range(min = 0))]
    pub file_size: Option<i64>,

    #[validate(length(min = 1, max = 50))]
    pub mime_type: Option<String>,

    #[validate(range(min = 0))]
    pub width: Option<i32>,

    #[validate(range(min = 0))]
    pub height: Option<i32>,
}

/// Photo DTO for API responses
/// The binary payload is never serialized; clients only learn whether one exists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoResponse {
    pub id: String,
    pub original_file_name: String,
    pub stored_file_name: String,
    pub file_path: Option<String>,
    pub file_size: i64,
    pub mime_type: String,
    pub uploaded_at: NaiveDateTime,
    pub width: i32,
    pub height: i32,
    pub has_photo_data: bool,
}

impl Photo {
    /// Convert database photo into API response DTO
    pub fn to_response(&self) -> PhotoResponse {
        PhotoResponse {
            id: self.id.clone(),
            original_file_name: self.original_file_name.clone(),
            stored_file_name: self.stored_file_name.clone(),
            file_path: self.file_path.clone(),
            file_size: self.file_size,
            mime_type: self.mime_type.clone(),
            uploaded_at: self.uploaded_at,
            width: self.width,
            height: self.height,
            has_photo_data: self.photo_data.is_some(),
        }
    }
}

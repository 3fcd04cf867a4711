// src/services/photo_query_service.rs
// DOCUMENTATION: Read-only photo queries
// PURPOSE: Turn caller parameters into repository calls and shape the results

use crate::db::PhotoRepository;
use crate::errors::PhotoError;
use crate::models::{Photo, PhotoStatistics};
use crate::services::statistics::compute_statistics;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::PgPool;

/// OFFSET/LIMIT equivalent of a 1-based inclusive row range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWindow {
    pub offset: i64,
    pub limit: i64,
}

impl RowWindow {
    /// `None` when the range selects nothing
    /// A start below 1 is clamped to the first row.
    pub fn from_rows(start_row: i64, end_row: i64) -> Option<Self> {
        let start = start_row.max(1);
        if end_row < start {
            return None;
        }
        Some(RowWindow {
            offset: start - 1,
            limit: end_row - start + 1,
        })
    }
}

/// Half-open `[first of month, first of next month)` for "YYYY" and "MM" strings
pub fn month_bounds(
    year: &str,
    month: &str,
) -> Result<(NaiveDateTime, NaiveDateTime), PhotoError> {
    fn digits(value: &str, width: usize, name: &str) -> Result<u32, PhotoError> {
        if value.len() != width || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PhotoError::InvalidParameter(format!(
                "{} must be exactly {} digits, got {:?}",
                name, width, value
            )));
        }
        value
            .parse()
            .map_err(|_| PhotoError::InvalidParameter(format!("{} is not a number", name)))
    }

    let y = digits(year, 4, "year")? as i32;
    let m = digits(month, 2, "month")?;
    if !(1..=12).contains(&m) {
        return Err(PhotoError::InvalidParameter(format!(
            "month must be between 01 and 12, got {}",
            month
        )));
    }

    let (next_y, next_m) = if m == 12 { (y + 1, 1) } else { (y, m + 1) };
    let start = NaiveDate::from_ymd_opt(y, m, 1).and_then(|d| d.and_hms_opt(0, 0, 0));
    let end = NaiveDate::from_ymd_opt(next_y, next_m, 1).and_then(|d| d.and_hms_opt(0, 0, 0));

    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(PhotoError::InvalidParameter(format!(
            "unrepresentable month {}-{}",
            year, month
        ))),
    }
}

pub struct PhotoQueryService;

impl PhotoQueryService {
    /// Every photo, newest first, unbounded
    pub async fn list_all_descending(pool: &PgPool) -> Result<Vec<Photo>, PhotoError> {
        PhotoRepository::find_all_order_by_uploaded_at_desc(pool).await
    }

    /// "Previous" navigation: up to 10 older photos, nearest first
    pub async fn find_before(
        pool: &PgPool,
        uploaded_at: NaiveDateTime,
    ) -> Result<Vec<Photo>, PhotoError> {
        PhotoRepository::find_uploaded_before(pool, uploaded_at).await
    }

    /// "Next" navigation: every newer photo, nearest first
    /// NULL file paths come back as `DEFAULT_FILE_PATH` on this path only.
    pub async fn find_after(
        pool: &PgPool,
        uploaded_at: NaiveDateTime,
    ) -> Result<Vec<Photo>, PhotoError> {
        PhotoRepository::find_uploaded_after(pool, uploaded_at).await
    }

    pub async fn find_by_month(
        pool: &PgPool,
        year: &str,
        month: &str,
    ) -> Result<Vec<Photo>, PhotoError> {
        let (from, until) = month_bounds(year, month)?;
        PhotoRepository::find_uploaded_between(pool, from, until).await
    }

    /// Rows `start_row..=end_row` (1-based) of the newest-first listing
    /// Out-of-range bounds truncate or yield an empty page, never an error.
    pub async fn paginate(
        pool: &PgPool,
        start_row: i64,
        end_row: i64,
    ) -> Result<Vec<Photo>, PhotoError> {
        match RowWindow::from_rows(start_row, end_row) {
            Some(window) => PhotoRepository::find_page(pool, window.offset, window.limit).await,
            None => {
                log::debug!("Empty row range {}..={}", start_row, end_row);
                Ok(Vec::new())
            }
        }
    }

    pub async fn statistics_overview(pool: &PgPool) -> Result<Vec<PhotoStatistics>, PhotoError> {
        let ascending = PhotoRepository::find_all_order_by_uploaded_at_asc(pool).await?;
        Ok(compute_statistics(ascending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_window_regular_range() {
        assert_eq!(
            RowWindow::from_rows(11, 20),
            Some(RowWindow { offset: 10, limit: 10 })
        );
        assert_eq!(
            RowWindow::from_rows(1, 1),
            Some(RowWindow { offset: 0, limit: 1 })
        );
    }

    #[test]
    fn test_row_window_clamps_start() {
        assert_eq!(
            RowWindow::from_rows(0, 3),
            Some(RowWindow { offset: 0, limit: 3 })
        );
        assert_eq!(
            RowWindow::from_rows(-5, 2),
            Some(RowWindow { offset: 0, limit: 2 })
        );
    }

    #[test]
    fn test_row_window_empty_ranges() {
        assert_eq!(RowWindow::from_rows(5, 4), None);
        assert_eq!(RowWindow::from_rows(0, 0), None);
        assert_eq!(RowWindow::from_rows(-3, -1), None);
    }

    #[test]
    fn test_month_bounds_march() {
        let (from, until) = month_bounds("2024", "03").unwrap();
        assert_eq!(from.to_string(), "2024-03-01 00:00:00");
        assert_eq!(until.to_string(), "2024-04-01 00:00:00");
    }

    #[test]
    fn test_month_bounds_december_rolls_year() {
        let (from, until) = month_bounds("2023", "12").unwrap();
        assert_eq!(from.to_string(), "2023-12-01 00:00:00");
        assert_eq!(until.to_string(), "2024-01-01 00:00:00");
    }

    #[test]
    fn test_month_bounds_rejects_malformed_input() {
        for (year, month) in [
            ("24", "03"),
            ("2024", "3"),
            ("2024", "13"),
            ("2024", "00"),
            ("20a4", "03"),
            ("2024", "+3"),
        ] {
            assert!(
                matches!(month_bounds(year, month), Err(PhotoError::InvalidParameter(_))),
                "{}-{} should be rejected",
                year,
                month
            );
        }
    }
}

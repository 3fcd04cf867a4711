// src/services/statistics.rs
// DOCUMENTATION: Size ranking and running storage totals
// PURPOSE: Two-pass statistics over a time-ordered photo list

use crate::models::{Photo, PhotoStatistics};

/// Attach `size_rank` and `running_total` to every photo
///
/// `ascending` must be ordered by `uploaded_at` ascending: the running total
/// accumulates in that order. The result is re-sorted newest first.
///
/// `size_rank` follows SQL `RANK()` over `file_size DESC`: equal sizes share a
/// rank and the next distinct size skips past the tie (1, 1, 3).
pub fn compute_statistics(ascending: Vec<Photo>) -> Vec<PhotoStatistics> {
    let mut sizes_desc: Vec<i64> = ascending.iter().map(|p| p.file_size).collect();
    sizes_desc.sort_unstable_by(|a, b| b.cmp(a));

    // Pass 1: accumulate in upload order
    let mut running_total: i64 = 0;
    let mut stats: Vec<PhotoStatistics> = ascending
        .into_iter()
        .map(|photo| {
            running_total = running_total.saturating_add(photo.file_size);
            let larger = sizes_desc.partition_point(|&size| size > photo.file_size);
            PhotoStatistics {
                size_rank: larger as i64 + 1,
                running_total,
                photo,
            }
        })
        .collect();

    // Pass 2: present newest first
    stats.reverse();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn photo(id: &str, day: u32, file_size: i64) -> Photo {
        Photo {
            id: id.to_string(),
            original_file_name: format!("{}.jpg", id),
            photo_data: None,
            stored_file_name: format!("{}-stored.jpg", id),
            file_path: None,
            file_size,
            mime_type: "image/jpeg".to_string(),
            uploaded_at: at(day),
            width: 640,
            height: 480,
        }
    }

    #[test]
    fn test_running_total_accumulates_oldest_first() {
        let rows = vec![photo("a", 1, 100), photo("b", 2, 50), photo("c", 3, 25)];

        let stats = compute_statistics(rows);

        let ids: Vec<&str> = stats.iter().map(|s| s.photo.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);

        let totals: Vec<i64> = stats.iter().map(|s| s.running_total).collect();
        assert_eq!(totals, vec![175, 150, 100]);
    }

    #[test]
    fn test_running_total_non_decreasing_in_upload_order() {
        let rows = vec![
            photo("a", 1, 10),
            photo("b", 2, 0),
            photo("c", 3, 7),
            photo("d", 4, 3),
        ];

        let mut stats = compute_statistics(rows);
        stats.reverse();

        assert!(stats
            .windows(2)
            .all(|w| w[0].running_total <= w[1].running_total));
        assert!(stats
            .windows(2)
            .all(|w| w[0].photo.uploaded_at <= w[1].photo.uploaded_at));
    }

    #[test]
    fn test_rank_leaves_gap_after_ties() {
        let rows = vec![
            photo("a", 1, 500),
            photo("b", 2, 900),
            photo("c", 3, 900),
            photo("d", 4, 100),
        ];

        let stats = compute_statistics(rows);

        let rank_of = |id: &str| {
            stats
                .iter()
                .find(|s| s.photo.id == id)
                .map(|s| s.size_rank)
                .unwrap()
        };
        assert_eq!(rank_of("b"), 1);
        assert_eq!(rank_of("c"), 1);
        assert_eq!(rank_of("a"), 3);
        assert_eq!(rank_of("d"), 4);
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_statistics(Vec::new()).is_empty());
    }
}

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::models::Comment;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct MonthlyBucket {
    pub month: &'static str,
    /// `None` when no comment fell into this month.
    pub count: Option<usize>,
}

/// Counts comments per calendar month, Jan through Dec.
///
/// The year is ignored: March 2023 and March 2024 land in the same bucket.
/// Timestamps that cannot be read are skipped. An empty input gives an empty
/// histogram rather than twelve absent buckets.
pub fn monthly_distribution(comments: &[Comment]) -> Vec<MonthlyBucket> {
    if comments.is_empty() {
        return Vec::new();
    }

    let mut counts = [0usize; 12];
    for comment in comments {
        match month_index(&comment.timestamp) {
            Some(index) => counts[index] += 1,
            None => tracing::debug!(
                comment_id = %comment.comment_id,
                timestamp = %comment.timestamp,
                "skipping comment with unreadable timestamp"
            ),
        }
    }

    MONTH_LABELS
        .into_iter()
        .zip(counts)
        .map(|(month, count)| MonthlyBucket {
            month,
            count: (count > 0).then_some(count),
        })
        .collect()
}

/// Zero-based calendar month of an ISO-8601 timestamp, in the viewer's local
/// time zone. Timestamps without an offset are taken as already local.
pub fn month_index(timestamp: &str) -> Option<usize> {
    let timestamp = timestamp.trim();

    let month = if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        parsed.with_timezone(&Local).month()
    } else if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        parsed.month()
    } else {
        NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok()?.month()
    };

    Some(month as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::comment;
    use crate::models::Sentiment;

    #[test]
    fn test_empty_input() {
        assert!(monthly_distribution(&[]).is_empty());
    }

    #[test]
    fn test_merges_years_into_one_month() {
        let comments = vec![
            comment("1", "a", "2023-01-10T08:00:00", Sentiment::Agree),
            comment("2", "b", "2024-01-22T19:30:00", Sentiment::Neutral),
            comment("3", "c", "2024-03-15", Sentiment::Disagree),
        ];

        let buckets = monthly_distribution(&comments);
        assert_eq!(buckets.len(), 12);
        assert_eq!(buckets[0], MonthlyBucket { month: "Jan", count: Some(2) });
        assert_eq!(buckets[2], MonthlyBucket { month: "Mar", count: Some(1) });
    }

    #[test]
    fn test_empty_months_are_absent() {
        let comments = vec![comment("1", "a", "2024-06-15T12:00:00", Sentiment::Agree)];

        let buckets = monthly_distribution(&comments);
        let labels: Vec<_> = buckets.iter().map(|bucket| bucket.month).collect();
        assert_eq!(labels, MONTH_LABELS.to_vec());
        assert_eq!(buckets[5].count, Some(1));
        assert!(buckets
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 5)
            .all(|(_, bucket)| bucket.count.is_none()));
    }

    fn local_month(timestamp: &str) -> usize {
        DateTime::parse_from_rfc3339(timestamp)
            .unwrap()
            .with_timezone(&Local)
            .month() as usize
            - 1
    }

    #[test]
    fn test_month_follows_local_time_zone() {
        // Near a month boundary the bucket depends on where the viewer is.
        for timestamp in [
            "2024-01-31T23:30:00-05:00",
            "2024-03-01T00:30:00+09:00",
            "2024-06-30T23:59:59Z",
        ] {
            assert_eq!(month_index(timestamp), Some(local_month(timestamp)), "{timestamp}");
        }
    }

    #[test]
    fn test_month_index_formats() {
        assert_eq!(month_index("2024-12-01T10:00:00.123"), Some(11));
        assert_eq!(month_index("2024-07-04"), Some(6));
        assert_eq!(month_index("yesterday"), None);
    }

    #[test]
    fn test_skips_unreadable_timestamps() {
        let comments = vec![
            comment("1", "a", "not a date", Sentiment::Agree),
            comment("2", "b", "2024-02-02T00:00:00Z", Sentiment::Agree),
        ];

        let buckets = monthly_distribution(&comments);
        let total: usize = buckets.iter().filter_map(|bucket| bucket.count).sum();
        assert_eq!(total, 1);
    }
}

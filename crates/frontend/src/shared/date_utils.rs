/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Whole minutes elapsed since `since`, never negative
pub fn minutes_since(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - since).num_minutes().max(0)
}

/// Label shown on order cards
/// Example: created 5 minutes ago -> "5 min ago"
pub fn format_time_ago(since: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!("{} min ago", minutes_since(since, now))
}

/// Format a timestamp as DD.MM.YYYY HH:MM:SS
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_time_ago() {
        let created = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        assert_eq!(format_time_ago(created, created), "0 min ago");
        assert_eq!(
            format_time_ago(created, created + Duration::seconds(119)),
            "1 min ago"
        );
        assert_eq!(
            format_time_ago(created, created + Duration::hours(2)),
            "120 min ago"
        );
    }

    #[test]
    fn test_clock_skew_is_clamped() {
        let created = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        assert_eq!(minutes_since(created, created - Duration::minutes(3)), 0);
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(dt), "15.03.2024 14:02:26");
    }
}

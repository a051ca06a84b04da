/// Utilities for date and time formatting
use chrono::{DateTime, Utc};

/// Format a log timestamp as DD.MM.YYYY HH:MM:SS (UTC), "-" when absent
/// Example: 2024-03-15T14:02:26.123Z -> "15.03.2024 14:02:26"
pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%d.%m.%Y %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let ts = "2024-03-15T14:02:26.123Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_timestamp(Some(ts)), "15.03.2024 14:02:26");
        let ts = "2024-12-31T23:59:59Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_timestamp(Some(ts)), "31.12.2024 23:59:59");
    }

    #[test]
    fn test_missing_timestamp() {
        assert_eq!(format_timestamp(None), "-");
    }
}

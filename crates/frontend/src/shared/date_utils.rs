/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::DateTime;

/// Format an RFC 3339 timestamp as a long-form date with time.
/// Example: "2024-03-15T14:02:26.123Z" -> "March 15, 2024 02:02 PM"
///
/// Returns the input unchanged if it does not parse, so a malformed
/// server value degrades to raw text instead of an empty cell.
pub fn format_datetime_long(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.format("%B %-d, %Y %I:%M %p").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Format an RFC 3339 timestamp as a date only.
/// Example: "2024-03-15T14:02:26Z" -> "March 15, 2024"
pub fn format_date_long(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.format("%B %-d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime_long() {
        assert_eq!(
            format_datetime_long("2024-03-15T14:02:26.123Z"),
            "March 15, 2024 02:02 PM"
        );
        assert_eq!(
            format_datetime_long("2024-12-31T09:05:00Z"),
            "December 31, 2024 09:05 AM"
        );
    }

    #[test]
    fn test_format_date_long() {
        assert_eq!(format_date_long("2024-03-15T14:02:26Z"), "March 15, 2024");
        assert_eq!(format_date_long("2024-01-05T00:00:00Z"), "January 5, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime_long("invalid"), "invalid");
        assert_eq!(format_date_long(""), "");
    }
}

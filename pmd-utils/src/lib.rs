//! Shared utility functions for PMD crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Length of a "YYYY-MM-DD" date prefix.
    const ISO_DATE_LEN: usize = 10;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Parse the calendar date at the start of a string.
    ///
    /// Accepts a bare "YYYY-MM-DD" as well as timestamps that begin with one
    /// (e.g. "2024-01-05T23:10:00+00:00"). Only the calendar components are
    /// kept; any time or offset is ignored.
    pub fn parse_date_prefix(s: &str) -> anyhow::Result<NaiveDate> {
        let trimmed = s.trim();
        match trimmed.get(..ISO_DATE_LEN) {
            Some(prefix) if trimmed.len() == ISO_DATE_LEN || !is_digit_at(trimmed, ISO_DATE_LEN) => {
                parse_date(prefix)
            }
            _ => parse_date(trimmed),
        }
    }

    fn is_digit_at(s: &str, idx: usize) -> bool {
        s.as_bytes().get(idx).is_some_and(u8::is_ascii_digit)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2024-01-05");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_date_prefix_timestamp() {
            let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
            assert_eq!(parse_date_prefix("2024-01-05").unwrap(), date);
            assert_eq!(parse_date_prefix("2024-01-05T23:10:00+00:00").unwrap(), date);
            assert_eq!(parse_date_prefix(" 2024-01-05 ").unwrap(), date);
        }

        #[test]
        fn test_parse_date_prefix_rejects_garbage() {
            assert!(parse_date_prefix("").is_err());
            assert!(parse_date_prefix("yesterday").is_err());
            assert!(parse_date_prefix("2024-13-01").is_err());
            // A trailing digit means the prefix is not a date on its own
            assert!(parse_date_prefix("2024-01-051").is_err());
        }
    }
}

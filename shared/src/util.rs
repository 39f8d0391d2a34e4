//! Small shared utilities

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a numeric primary key as a display-only id, e.g. `D003`
///
/// Zero-pads to three digits; wider ids keep their natural width.
pub fn format_display_id(prefix: char, id: i64) -> String {
    format!("{prefix}{id:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_id() {
        assert_eq!(format_display_id('D', 3), "D003");
        assert_eq!(format_display_id('R', 42), "R042");
        assert_eq!(format_display_id('B', 1234), "B1234");
    }
}

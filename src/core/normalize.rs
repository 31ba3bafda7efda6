//! Field normalization
//!
//! Pure mapping functions from raw source-store values to the external
//! vocabulary. Every function is total: absent or blank input maps to a
//! defined default, never to null. The functions are stateless and
//! deterministic, so the same record always normalizes identically.

use chrono::{DateTime, Utc};

/// Fallback for categorical text fields (program, class, record type)
pub const FALLBACK_NONE: &str = "None";

/// Fallback for entity fields (subsidiary, backend entity)
pub const FALLBACK_ENTITY: &str = "FYLS";

/// Wire date format: day/month/4-digit-year
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Numeric fields: absent maps to `0`
pub fn amount_or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Text fields: absent or blank maps to the field's fallback string
pub fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => fallback.to_string(),
    }
}

/// Boolean fields: `Some(true)` maps to "Yes", anything else to "No"
pub fn yes_no(value: Option<bool>) -> String {
    if value.unwrap_or(false) {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

/// Date fields: `dd/MM/yyyy`, or the empty string when absent
///
/// Only the calendar date participates in the output, so the time-of-day
/// component of a source timestamp never changes the rendered value.
pub fn date_label(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    #[test]
    fn test_amount_or_zero() {
        assert_eq!(amount_or_zero(Some(1250.5)), 1250.5);
        assert_eq!(amount_or_zero(None), 0.0);
    }

    #[test]
    fn test_text_or_present() {
        assert_eq!(text_or(Some("Playgroup"), FALLBACK_NONE), "Playgroup");
    }

    #[test]
    fn test_text_or_absent() {
        assert_eq!(text_or(None, FALLBACK_NONE), "None");
        assert_eq!(text_or(None, FALLBACK_ENTITY), "FYLS");
        assert_eq!(text_or(None, ""), "");
    }

    #[test]
    fn test_text_or_blank() {
        assert_eq!(text_or(Some(""), FALLBACK_NONE), "None");
        assert_eq!(text_or(Some("   "), FALLBACK_NONE), "None");
    }

    #[test_case(Some(true) => "Yes")]
    #[test_case(Some(false) => "No")]
    #[test_case(None => "No")]
    fn test_yes_no(value: Option<bool>) -> String {
        yes_no(value)
    }

    #[test]
    fn test_date_label_formats_day_month_year() {
        let date = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
        assert_eq!(date_label(Some(date)), "01/04/2025");
    }

    #[test]
    fn test_date_label_absent_is_empty() {
        assert_eq!(date_label(None), "");
    }

    #[test]
    fn test_date_label_ignores_time_of_day() {
        let midnight = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2025, 4, 1, 23, 59, 59).unwrap();
        assert_eq!(date_label(Some(midnight)), date_label(Some(evening)));
    }

    #[test]
    fn test_date_label_four_digit_year() {
        let date = Utc.with_ymd_and_hms(987, 12, 31, 12, 0, 0).unwrap();
        assert_eq!(date_label(Some(date)), "31/12/0987");
    }
}

//! Helpers for turning raw query-string values into typed options.
//!
//! Query parameters arrive as strings. Blank values count as absent, and a
//! few filters also accept the literal [`ANY`] to mean "no constraint".
//! Everything past this module works with plain `Option`s.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::AppError;
use crate::result::AppResult;

/// Wire sentinel meaning "do not constrain this field".
pub const ANY: &str = "any";

/// Trim the value and drop it when blank.
pub fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Like [`present`], but also drops the [`ANY`] sentinel.
pub fn constrained(raw: Option<&str>) -> Option<&str> {
    present(raw).filter(|v| *v != ANY)
}

/// Parse an optional value with `FromStr`, reporting failures against `field`.
pub fn parse_opt<T: FromStr>(field: &str, raw: Option<&str>) -> AppResult<Option<T>> {
    present(raw)
        .map(|v| {
            v.parse::<T>().map_err(|_| {
                AppError::invalid_field(field, format!("Invalid value for {field}: '{v}'"))
            })
        })
        .transpose()
}

/// Parse an optional finite, non-negative decimal.
pub fn parse_non_negative(field: &str, raw: Option<&str>) -> AppResult<Option<f64>> {
    match parse_opt::<f64>(field, raw)? {
        Some(v) if !v.is_finite() => Err(AppError::invalid_field(
            field,
            format!("{field} must be a finite number"),
        )),
        Some(v) if v < 0.0 => Err(AppError::invalid_field(
            field,
            format!("{field} must not be negative"),
        )),
        other => Ok(other),
    }
}

/// Split a comma-separated list, trimming entries and dropping blanks.
pub fn split_list(raw: Option<&str>) -> Vec<&str> {
    present(raw)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Parse a comma-separated list where every entry must parse as `T`.
pub fn parse_list<T: FromStr>(field: &str, raw: Option<&str>) -> AppResult<Vec<T>> {
    split_list(raw)
        .into_iter()
        .map(|item| {
            item.parse::<T>().map_err(|_| {
                AppError::invalid_field(field, format!("Invalid entry in {field}: '{item}'"))
            })
        })
        .collect()
}

/// Parse a calendar date (`YYYY-MM-DD`, taken as midnight UTC) or an
/// RFC 3339 timestamp.
pub fn parse_date(field: &str, value: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| {
            AppError::invalid_field(field, format!("Invalid date for {field}: '{value}'"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_blank_and_sentinel() {
        assert_eq!(present(Some("  ")), None);
        assert_eq!(present(Some(" 2 ")), Some("2"));
        assert_eq!(constrained(Some("any")), None);
        assert_eq!(constrained(Some("3")), Some("3"));
        assert_eq!(constrained(None), None);
    }

    #[test]
    fn test_parse_opt_reports_field() {
        assert_eq!(parse_opt::<i32>("beds", Some("2")).unwrap(), Some(2));
        assert_eq!(parse_opt::<i32>("beds", Some("")).unwrap(), None);

        let err = parse_opt::<i32>("beds", Some("two")).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("beds"));
    }

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(
            parse_non_negative("priceMin", Some("1000.5")).unwrap(),
            Some(1000.5)
        );
        assert!(parse_non_negative("priceMin", Some("-1")).is_err());
        assert!(parse_non_negative("priceMin", Some("inf")).is_err());
        assert!(parse_non_negative("priceMin", Some("cheap")).is_err());
    }

    #[test]
    fn test_lists() {
        assert_eq!(split_list(Some("WiFi, Parking,,")), vec!["WiFi", "Parking"]);
        assert!(split_list(None).is_empty());
        assert_eq!(parse_list::<i32>("favoriteIds", Some("1,2, 3")).unwrap(), vec![1, 2, 3]);
        assert!(parse_list::<i32>("favoriteIds", Some("1,x")).is_err());
    }

    #[test]
    fn test_parse_date_formats() {
        let day = parse_date("availableFrom", "2024-06-01").unwrap();
        assert_eq!(day, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());

        let ts = parse_date("availableFrom", "2024-06-01T12:30:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 6, 1, 10, 30, 0).unwrap());

        let err = parse_date("availableFrom", "next week").unwrap_err();
        assert_eq!(err.field.as_deref(), Some("availableFrom"));
    }
}

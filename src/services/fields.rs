use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Deserializer, de};

use crate::error::AppError;

/// Distinguishes "absent" (`None`) from "explicitly null" (`Some(None)`).
/// Pair with `#[serde(default)]`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Optional timestamp accepting RFC 3339 or a bare `YYYY-MM-DD`. Blank means none.
pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<DateTimeWithTimeZone>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value).map(Some).map_err(de::Error::custom),
    }
}

pub fn nullable_date<'de, D>(
    deserializer: D,
) -> Result<Option<Option<DateTimeWithTimeZone>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_date(deserializer).map(Some)
}

pub fn parse_date(value: &str) -> Result<DateTimeWithTimeZone, String> {
    // Stored in UTC so SQL comparisons against "now" stay ordered.
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc).fixed_offset());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
        .map_err(|_| format!("invalid date '{value}', expected RFC 3339 or YYYY-MM-DD"))
}

/// Trimmed, non-blank text or a validation error naming the field.
pub fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(AppError::validation(format!("{field} required"))),
    }
}

pub fn finite(value: f64, field: &str) -> Result<f64, AppError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::validation(format!("{field} must be a finite number")))
    }
}

pub fn positive_scale(value: f64) -> Result<f64, AppError> {
    let value = finite(value, "scale")?;
    if value <= 0.0 {
        return Err(AppError::validation("scale must be greater than 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::{nullable, nullable_date, parse_date, positive_scale, required_text};

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable")]
        cover: Option<Option<String>>,
        #[serde(default, deserialize_with = "nullable_date")]
        expiry: Option<Option<sea_orm::prelude::DateTimeWithTimeZone>>,
    }

    #[test]
    fn nullable_separates_absent_from_null() {
        let absent: Patch = serde_json::from_str("{}").expect("should parse");
        let null: Patch = serde_json::from_str(r#"{"cover":null,"expiry":null}"#).expect("should parse");
        let set: Patch =
            serde_json::from_str(r#"{"cover":"a.png","expiry":"2026-03-01"}"#).expect("should parse");

        assert_eq!(absent.cover, None);
        assert_eq!(absent.expiry, None);
        assert_eq!(null.cover, Some(None));
        assert_eq!(null.expiry, Some(None));
        assert_eq!(set.cover, Some(Some("a.png".to_string())));
        assert!(matches!(set.expiry, Some(Some(_))));
    }

    #[test]
    fn parses_dates_in_both_formats() {
        let day = parse_date("2026-03-01").expect("date-only should parse");
        assert_eq!(day.to_rfc3339(), "2026-03-01T00:00:00+00:00");

        let ts = parse_date("2026-03-01T08:30:00+08:00").expect("rfc3339 should parse");
        assert_eq!(ts.to_rfc3339(), "2026-03-01T00:30:00+00:00");

        assert!(parse_date("next tuesday").is_err());
    }

    #[test]
    fn required_text_trims_and_rejects_blank() {
        assert_eq!(
            required_text(Some("  Pantry ".to_string()), "name").expect("should pass"),
            "Pantry"
        );
        assert_eq!(
            required_text(Some("   ".to_string()), "name")
                .expect_err("blank should fail")
                .message(),
            "name required"
        );
        assert!(required_text(None, "name").is_err());
    }

    #[test]
    fn scale_must_be_positive_and_finite() {
        assert_eq!(positive_scale(1.5).expect("should pass"), 1.5);
        assert!(positive_scale(0.0).is_err());
        assert!(positive_scale(f64::NAN).is_err());
    }
}

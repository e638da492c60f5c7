//! Single-field validation rules.
//!
//! Each rule is a pure function over the raw input that either returns the
//! typed value or the [`ValidationError`] naming the failure.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use url::Url;
use uuid::Uuid;
use validator::ValidateLength;

use crate::domain::query::{BookmarkField, SortDirection};
use crate::validation::{ErrorCode, ValidationError};

/// Maximum stored link length.
pub const MAX_LINK_LENGTH: u64 = 256;

/// Version-4 UUID, case-insensitive.
static UUID_V4_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .unwrap()
});

/// Checks that `raw` is an absolute `http`/`https` URL within the length bound.
pub fn check_link_format(raw: &str) -> Result<(), ValidationError> {
    if !raw.validate_length(None, Some(MAX_LINK_LENGTH), None) {
        return Err(ErrorCode::InvalidLink.into());
    }

    let url = Url::parse(raw).map_err(|_| ValidationError::new(ErrorCode::InvalidLink))?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some_and(|h| !h.is_empty()) => Ok(()),
        _ => Err(ErrorCode::InvalidLink.into()),
    }
}

/// Validates the `guid` path segment.
pub fn parse_uuid(raw: &str) -> Result<Uuid, ValidationError> {
    if !UUID_V4_REGEX.is_match(raw) {
        return Err(ErrorCode::InvalidUuid.into());
    }
    Uuid::parse_str(raw).map_err(|_| ErrorCode::InvalidUuid.into())
}

/// Accepts `true`, `false`, `"true"` and `"false"`.
pub fn parse_bool(value: &Value) -> Result<bool, ValidationError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => parse_bool_str(s),
        _ => Err(ErrorCode::InvalidFavorites.into()),
    }
}

/// String form of [`parse_bool`], used for query parameters.
pub fn parse_bool_str(raw: &str) -> Result<bool, ValidationError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ErrorCode::InvalidFavorites.into()),
    }
}

/// Accepts `createdAt` and `favorites`.
pub fn parse_sort_field(raw: &str) -> Result<BookmarkField, ValidationError> {
    match raw {
        "createdAt" => Ok(BookmarkField::CreatedAt),
        "favorites" => Ok(BookmarkField::Favorites),
        _ => Err(ErrorCode::SortConstraints.into()),
    }
}

/// Accepts `asc`, `desc`, `ASC` and `DESC`.
pub fn parse_sort_direction(raw: &str) -> Result<SortDirection, ValidationError> {
    match raw {
        "asc" | "ASC" => Ok(SortDirection::Asc),
        "desc" | "DESC" => Ok(SortDirection::Desc),
        _ => Err(ErrorCode::DirConstraints.into()),
    }
}

/// Parses a non-negative integer page parameter.
pub fn parse_page_param(raw: &str, code: ErrorCode) -> Result<i64, ValidationError> {
    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(code.into()),
    }
}

/// Parses an epoch-milliseconds timestamp filter value.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .ok_or_else(|| ErrorCode::FilterForTimestamp.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_format_accepts_http_and_https() {
        assert!(check_link_format("https://ya.ru").is_ok());
        assert!(check_link_format("http://nodejs.org/docs?q=1").is_ok());
    }

    #[test]
    fn test_link_format_rejects_other_schemes() {
        for link in ["ftp://ya.ru", "javascript:alert(1)", "mailto:a@b.c", "ya.ru", ""] {
            let err = check_link_format(link).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidLink, "{link}");
        }
    }

    #[test]
    fn test_link_format_rejects_overlong_links() {
        let link = format!("https://ya.ru/{}", "a".repeat(300));
        assert_eq!(
            check_link_format(&link).unwrap_err().code,
            ErrorCode::InvalidLink
        );
    }

    #[test]
    fn test_uuid_v4_case_insensitive() {
        assert!(parse_uuid("97f10d85-5d2f-4450-a0c4-307e8e9a991f").is_ok());
        assert!(parse_uuid("97F10D85-5D2F-4450-A0C4-307E8E9A991F").is_ok());
    }

    #[test]
    fn test_uuid_rejects_other_versions_and_garbage() {
        // version 1
        assert!(parse_uuid("97f10d85-5d2f-1450-a0c4-307e8e9a991f").is_err());
        assert!(parse_uuid("not-a-uuid").is_err());
        assert_eq!(
            parse_uuid("123").unwrap_err().code,
            ErrorCode::InvalidUuid
        );
    }

    #[test]
    fn test_bool_accepts_native_and_string_forms() {
        assert!(parse_bool(&json!(true)).unwrap());
        assert!(!parse_bool(&json!(false)).unwrap());
        assert!(parse_bool(&json!("true")).unwrap());
        assert!(!parse_bool(&json!("false")).unwrap());
    }

    #[test]
    fn test_bool_rejects_everything_else() {
        for value in [json!("TRUE"), json!(1), json!("yes"), json!(null), json!([])] {
            assert_eq!(
                parse_bool(&value).unwrap_err().code,
                ErrorCode::InvalidFavorites
            );
        }
    }

    #[test]
    fn test_sort_field_and_direction() {
        assert_eq!(parse_sort_field("createdAt").unwrap(), BookmarkField::CreatedAt);
        assert_eq!(parse_sort_field("favorites").unwrap(), BookmarkField::Favorites);
        assert_eq!(
            parse_sort_field("link").unwrap_err().code,
            ErrorCode::SortConstraints
        );

        assert_eq!(parse_sort_direction("ASC").unwrap(), SortDirection::Asc);
        assert_eq!(parse_sort_direction("desc").unwrap(), SortDirection::Desc);
        assert_eq!(
            parse_sort_direction("Desc").unwrap_err().code,
            ErrorCode::DirConstraints
        );
    }

    #[test]
    fn test_page_param() {
        assert_eq!(parse_page_param("20", ErrorCode::InvalidLimit).unwrap(), 20);
        assert_eq!(parse_page_param("0", ErrorCode::InvalidOffset).unwrap(), 0);
        assert_eq!(
            parse_page_param("-1", ErrorCode::InvalidOffset).unwrap_err().code,
            ErrorCode::InvalidOffset
        );
        assert!(parse_page_param("ten", ErrorCode::InvalidLimit).is_err());
    }

    #[test]
    fn test_timestamp_parsing() {
        let ts = parse_timestamp("1571161876951").unwrap();
        assert_eq!(ts.timestamp_millis(), 1_571_161_876_951);
        assert_eq!(
            parse_timestamp("12.5").unwrap_err().code,
            ErrorCode::FilterForTimestamp
        );
        assert!(parse_timestamp("true").is_err());
    }
}

//! Error code catalog for request validation failures.
//!
//! Every rule in [`crate::validation`] fails with a [`ValidationError`] carrying
//! one [`ErrorCode`]. The HTTP layer renders it as `{ "code", "description" }`.

use serde::Serialize;
use std::fmt;
use url::Url;

/// Symbolic validation failure codes, stable on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    SortConstraints,
    DirConstraints,
    FilterRange,
    FilterValueUnsetForRange,
    FilterForTimestamp,
    FilterValueInFavoriteFilters,
    FilterUnset,
    InvalidUnsetFilterParams,
    InvalidFilterValues,
    LinkIsUndefined,
    InvalidLink,
    BannedDomain,
    GuidIsUndefined,
    InvalidFavorites,
    InvalidUuid,
    InvalidLimit,
    InvalidOffset,
}

impl ErrorCode {
    /// Wire representation of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::SortConstraints => "SORTCONSTRAINTS_ERROR",
            ErrorCode::DirConstraints => "DIRCONSTRAINTS_ERROR",
            ErrorCode::FilterRange => "FILTER_RANGE_ERROR",
            ErrorCode::FilterValueUnsetForRange => "FILTER_VALUE_UNSET_FOR_RANGE",
            ErrorCode::FilterForTimestamp => "FILTER_FOR_TIMESTAMP",
            ErrorCode::FilterValueInFavoriteFilters => "FILTER_VALUE_IN_FAVORITE_FILTERS",
            ErrorCode::FilterUnset => "FILTER_UNSET",
            ErrorCode::InvalidUnsetFilterParams => "INVALID_UNSET_FILTER_PARAMS",
            ErrorCode::InvalidFilterValues => "INVALID_FILTER_VALUES",
            ErrorCode::LinkIsUndefined => "LINK_IS_UNDEFINED",
            ErrorCode::InvalidLink => "BOOKMARKS_INVALID_LINK",
            ErrorCode::BannedDomain => "BOOKMARKS_INVALID_DOMAIN",
            ErrorCode::GuidIsUndefined => "GUID_IS_UNDEFINED",
            ErrorCode::InvalidFavorites => "BOOKMARKS_INVALID_FAVORITES",
            ErrorCode::InvalidUuid => "BOOKMARKS_INVALID_UUID",
            ErrorCode::InvalidLimit => "INVALID_LIMIT",
            ErrorCode::InvalidOffset => "INVALID_OFFSET",
        }
    }

    /// Human-readable description of the code.
    ///
    /// [`ErrorCode::BannedDomain`] has a generic text here; the concrete message
    /// naming the rejected host comes from [`ValidationError::description`].
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::SortConstraints => "You can enter only 'createdAt' or 'favorites'",
            ErrorCode::DirConstraints => "You can enter only 'asc' and 'desc'",
            ErrorCode::FilterRange => "Filter range error: filter_from > filter_to",
            ErrorCode::FilterValueUnsetForRange => {
                "Filter_value must be unset when doing range filter"
            }
            ErrorCode::FilterForTimestamp => "Values of filter must be integer",
            ErrorCode::FilterValueInFavoriteFilters => "Use filter_value with favorites filter",
            ErrorCode::FilterUnset => "Filter field not set",
            ErrorCode::InvalidUnsetFilterParams => {
                "Filter_value or filter_to or filter_from must be set"
            }
            ErrorCode::InvalidFilterValues => "Filter_value must be set",
            ErrorCode::LinkIsUndefined => "You didn't enter a link",
            ErrorCode::InvalidLink => "Invalid link",
            ErrorCode::BannedDomain => "Domain banned",
            ErrorCode::GuidIsUndefined => "You didn't enter guid parameter",
            ErrorCode::InvalidFavorites => "Invalid favorite parameter",
            ErrorCode::InvalidUuid => "Invalid uuid",
            ErrorCode::InvalidLimit => "Limit must be a non-negative integer",
            ErrorCode::InvalidOffset => "Offset must be a non-negative integer",
        }
    }
}

/// A single validation failure.
///
/// `link` is only set for [`ErrorCode::BannedDomain`] and holds the rejected URL.
/// `in_filter` marks a field-name error raised while checking the `filter` param.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: ErrorCode,
    pub link: Option<String>,
    pub in_filter: bool,
}

impl ValidationError {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            link: None,
            in_filter: false,
        }
    }

    /// Rejection of a denylisted link.
    pub fn banned(link: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::BannedDomain,
            link: Some(link.into()),
            in_filter: false,
        }
    }

    /// Marks the error as coming from the `filter` query param.
    pub fn in_filter_param(mut self) -> Self {
        self.in_filter = true;
        self
    }

    /// Renders the human-readable description.
    ///
    /// For banned links this names the host, e.g. `yahoo.com banned`.
    pub fn description(&self) -> String {
        let base = match (&self.code, &self.link) {
            (ErrorCode::BannedDomain, Some(link)) => {
                let host = Url::parse(link)
                    .ok()
                    .and_then(|url| url.host_str().map(str::to_owned))
                    .unwrap_or_else(|| link.clone());
                format!("{host} banned")
            }
            (code, _) => code.description().to_string(),
        };

        if self.in_filter {
            format!("{base} in filter param")
        } else {
            base
        }
    }

    /// Builds the JSON-serializable body entry.
    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            code: self.code.as_str(),
            description: self.description(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.description())
    }
}

impl std::error::Error for ValidationError {}

impl From<ErrorCode> for ValidationError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

/// Wire shape of a validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub description: String,
}

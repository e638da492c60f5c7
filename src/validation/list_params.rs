//! Query parameters of the list endpoint and their cross-field rules.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::domain::query::BookmarkField;
use crate::validation::constraints::{
    parse_bool_str, parse_page_param, parse_sort_direction, parse_sort_field, parse_timestamp,
};
use crate::validation::{ErrorCode, ValidationError};

/// Raw query parameters of `GET /bookmarks`.
///
/// Values stay strings until validated so every failure maps to an error code
/// instead of a deserialization rejection. Empty values count as absent.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub limit: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub offset: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub sort_by: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub sort_dir: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub filter: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub filter_value: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub filter_from: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub filter_to: Option<String>,
}

/// Which of the three filter operands is being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Value,
    From,
    To,
}

impl FilterKey {
    pub fn is_range(self) -> bool {
        matches!(self, FilterKey::From | FilterKey::To)
    }
}

impl ListParams {
    pub fn filter_operand(&self, key: FilterKey) -> Option<&str> {
        match key {
            FilterKey::Value => self.filter_value.as_deref(),
            FilterKey::From => self.filter_from.as_deref(),
            FilterKey::To => self.filter_to.as_deref(),
        }
    }

    /// Runs every rule and collects all failures in parameter order:
    /// limit, offset, sort_by, sort_dir, filter, filter_value, filter_from, filter_to.
    pub fn validate(&self) -> Vec<ValidationError> {
        let checks = [
            self.limit
                .as_deref()
                .map_or(Ok(()), |v| parse_page_param(v, ErrorCode::InvalidLimit).map(drop)),
            self.offset
                .as_deref()
                .map_or(Ok(()), |v| parse_page_param(v, ErrorCode::InvalidOffset).map(drop)),
            self.sort_by
                .as_deref()
                .map_or(Ok(()), |v| parse_sort_field(v).map(drop)),
            self.sort_dir
                .as_deref()
                .map_or(Ok(()), |v| parse_sort_direction(v).map(drop)),
            check_filter_field(self),
            check_filter_operand(self, FilterKey::Value),
            check_filter_operand(self, FilterKey::From),
            check_filter_operand(self, FilterKey::To),
        ];

        checks.into_iter().filter_map(Result::err).collect()
    }
}

/// Rule for the `filter` param.
///
/// The field must be sortable; `favorites` requires `filter_value`, and
/// `createdAt` requires at least one of the three operands.
pub fn check_filter_field(params: &ListParams) -> Result<(), ValidationError> {
    let Some(raw) = params.filter.as_deref() else {
        return Ok(());
    };

    let field = parse_sort_field(raw).map_err(ValidationError::in_filter_param)?;

    match field {
        BookmarkField::Favorites if params.filter_value.is_none() => {
            Err(ErrorCode::InvalidFilterValues.into())
        }
        BookmarkField::CreatedAt
            if params.filter_value.is_none()
                && params.filter_from.is_none()
                && params.filter_to.is_none() =>
        {
            Err(ErrorCode::InvalidUnsetFilterParams.into())
        }
        _ => Ok(()),
    }
}

/// Rule shared by `filter_value`, `filter_from` and `filter_to`.
pub fn check_filter_operand(params: &ListParams, key: FilterKey) -> Result<(), ValidationError> {
    let Some(raw) = params.filter_operand(key) else {
        return Ok(());
    };

    let Some(filter) = params.filter.as_deref() else {
        return Err(ErrorCode::FilterUnset.into());
    };

    if filter == BookmarkField::Favorites.as_str() {
        if key != FilterKey::Value {
            return Err(ErrorCode::FilterValueInFavoriteFilters.into());
        }
        return parse_bool_str(raw).map(drop);
    }

    let value = parse_timestamp(raw)?;

    if key.is_range() && params.filter_value.is_some() {
        return Err(ErrorCode::FilterValueUnsetForRange.into());
    }

    if key == FilterKey::From {
        let upper = params
            .filter_to
            .as_deref()
            .and_then(|to| parse_timestamp(to).ok());
        if upper.is_some_and(|to| to < value) {
            return Err(ErrorCode::FilterRange.into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        let map: serde_json::Map<String, serde_json::Value> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        serde_json::from_value(serde_json::Value::Object(map)).unwrap()
    }

    fn first_code(pairs: &[(&str, &str)]) -> Option<ErrorCode> {
        params(pairs).validate().first().map(|e| e.code)
    }

    #[test]
    fn test_empty_params_are_valid() {
        assert!(params(&[]).validate().is_empty());
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let p = params(&[("filter", ""), ("filter_value", "")]);
        assert!(p.filter.is_none());
        assert!(p.validate().is_empty());
    }

    #[test]
    fn test_invalid_limit_and_offset() {
        assert_eq!(first_code(&[("limit", "abc")]), Some(ErrorCode::InvalidLimit));
        assert_eq!(first_code(&[("offset", "-5")]), Some(ErrorCode::InvalidOffset));
    }

    #[test]
    fn test_sort_params() {
        assert_eq!(first_code(&[("sort_by", "link")]), Some(ErrorCode::SortConstraints));
        assert_eq!(first_code(&[("sort_dir", "up")]), Some(ErrorCode::DirConstraints));
        assert!(params(&[("sort_by", "favorites"), ("sort_dir", "DESC")])
            .validate()
            .is_empty());
    }

    #[test]
    fn test_unknown_filter_field_is_marked() {
        let errors = params(&[("filter", "link"), ("filter_value", "x")]).validate();
        let first = &errors[0];
        assert_eq!(first.code, ErrorCode::SortConstraints);
        assert!(first.in_filter);
    }

    #[test]
    fn test_favorites_filter_requires_value() {
        assert_eq!(
            first_code(&[("filter", "favorites")]),
            Some(ErrorCode::InvalidFilterValues)
        );
    }

    #[test]
    fn test_favorites_filter_rejects_range_keys() {
        let errors = params(&[("filter", "favorites"), ("filter_from", "true")]).validate();
        let codes: Vec<_> = errors.iter().map(|e| e.code).collect();
        assert_eq!(
            codes,
            vec![
                ErrorCode::InvalidFilterValues,
                ErrorCode::FilterValueInFavoriteFilters
            ]
        );
    }

    #[test]
    fn test_favorites_filter_value_must_be_boolean() {
        assert_eq!(
            first_code(&[("filter", "favorites"), ("filter_value", "yes")]),
            Some(ErrorCode::InvalidFavorites)
        );
        assert!(first_code(&[("filter", "favorites"), ("filter_value", "false")]).is_none());
    }

    #[test]
    fn test_created_at_filter_requires_an_operand() {
        assert_eq!(
            first_code(&[("filter", "createdAt")]),
            Some(ErrorCode::InvalidUnsetFilterParams)
        );
    }

    #[test]
    fn test_operand_without_filter() {
        assert_eq!(first_code(&[("filter_to", "10")]), Some(ErrorCode::FilterUnset));
    }

    #[test]
    fn test_timestamp_operand_must_be_integer() {
        assert_eq!(
            first_code(&[("filter", "createdAt"), ("filter_value", "yesterday")]),
            Some(ErrorCode::FilterForTimestamp)
        );
    }

    #[test]
    fn test_range_and_exact_are_exclusive() {
        assert_eq!(
            first_code(&[
                ("filter", "createdAt"),
                ("filter_value", "100"),
                ("filter_from", "50")
            ]),
            Some(ErrorCode::FilterValueUnsetForRange)
        );
    }

    #[test]
    fn test_range_inversion() {
        assert_eq!(
            first_code(&[
                ("filter", "createdAt"),
                ("filter_from", "100"),
                ("filter_to", "50")
            ]),
            Some(ErrorCode::FilterRange)
        );
    }

    #[test]
    fn test_range_compares_numerically() {
        assert!(first_code(&[
            ("filter", "createdAt"),
            ("filter_from", "50"),
            ("filter_to", "100")
        ])
        .is_none());
        assert!(first_code(&[
            ("filter", "createdAt"),
            ("filter_from", "100"),
            ("filter_to", "100")
        ])
        .is_none());
    }

    #[test]
    fn test_first_error_follows_parameter_order() {
        let errors = params(&[("sort_dir", "sideways"), ("limit", "x")]).validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].code, ErrorCode::InvalidLimit);
        assert_eq!(errors[1].code, ErrorCode::DirConstraints);
    }
}

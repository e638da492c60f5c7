//! Translation of validated list parameters into a [`BookmarkQuery`].

use crate::domain::query::{
    BookmarkField, BookmarkQuery, DEFAULT_LIMIT, DEFAULT_OFFSET, FieldFilter, FilterValue,
    PUBLIC_FIELDS, SortOrder,
};
use crate::validation::constraints::{
    parse_page_param, parse_sort_direction, parse_sort_field, parse_timestamp,
};
use crate::validation::{ErrorCode, ListParams, ValidationError};

/// Builds the storage query for `GET /bookmarks`.
///
/// # Steps
///
/// 1. Defaults: `offset=0`, `limit=50`, `sort_by=createdAt`, `sort_dir=asc`
/// 2. Operands are coerced by the filter field's type: `favorites` takes
///    `filter_value == "true"`, `createdAt` takes epoch milliseconds
/// 3. `filter_value` becomes an equality predicate, `filter_from`/`filter_to`
///    inclusive bounds
///
/// `limit` has no upper clamp.
///
/// # Errors
///
/// Expects parameters that already passed [`ListParams::validate`]; a value that
/// fails to parse here yields the same error the validator would report.
pub fn build_query(params: &ListParams) -> Result<BookmarkQuery, ValidationError> {
    let offset = params
        .offset
        .as_deref()
        .map(|v| parse_page_param(v, ErrorCode::InvalidOffset))
        .transpose()?
        .unwrap_or(DEFAULT_OFFSET);

    let limit = params
        .limit
        .as_deref()
        .map(|v| parse_page_param(v, ErrorCode::InvalidLimit))
        .transpose()?
        .unwrap_or(DEFAULT_LIMIT);

    let mut order = SortOrder::default();
    if let Some(sort_by) = params.sort_by.as_deref() {
        order.field = parse_sort_field(sort_by)?;
    }
    if let Some(sort_dir) = params.sort_dir.as_deref() {
        order.direction = parse_sort_direction(sort_dir)?;
    }

    let filter = match params.filter.as_deref() {
        Some(raw) => Some(build_filter(
            parse_sort_field(raw).map_err(ValidationError::in_filter_param)?,
            params,
        )?),
        None => None,
    };

    Ok(BookmarkQuery {
        fields: &PUBLIC_FIELDS,
        filter,
        order,
        offset,
        limit,
    })
}

fn build_filter(field: BookmarkField, params: &ListParams) -> Result<FieldFilter, ValidationError> {
    let coerce = |raw: &str| -> Result<FilterValue, ValidationError> {
        match field {
            BookmarkField::Favorites => Ok(FilterValue::Bool(raw == "true")),
            BookmarkField::CreatedAt => parse_timestamp(raw).map(FilterValue::Timestamp),
        }
    };

    let mut filter = FieldFilter::new(field);
    filter.eq = params.filter_value.as_deref().map(coerce).transpose()?;
    filter.gte = params.filter_from.as_deref().map(coerce).transpose()?;
    filter.lte = params.filter_to.as_deref().map(coerce).transpose()?;

    Ok(filter)
}

//! Storage-agnostic query descriptor for listing bookmarks.
//!
//! Built by [`crate::application::query_builder::build_query`] from validated
//! query parameters and executed by a [`crate::domain::repositories::BookmarkRepository`].

use chrono::{DateTime, Utc};

use crate::domain::entities::Bookmark;

/// Public fields returned for every listed record.
pub const PUBLIC_FIELDS: [&str; 5] = ["guid", "link", "createdAt", "description", "favorites"];

/// Default page size.
pub const DEFAULT_LIMIT: i64 = 50;

/// Default page offset.
pub const DEFAULT_OFFSET: i64 = 0;

/// Bookmark attributes that can be sorted and filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookmarkField {
    CreatedAt,
    Favorites,
}

impl BookmarkField {
    /// Name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            BookmarkField::CreatedAt => "createdAt",
            BookmarkField::Favorites => "favorites",
        }
    }

    /// Storage column name.
    pub fn column(self) -> &'static str {
        match self {
            BookmarkField::CreatedAt => "created_at",
            BookmarkField::Favorites => "favorites",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Typed operand of a field predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterValue {
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

/// Predicates applied to a single field.
///
/// `eq` is never combined with `gte`/`lte`; the bounds may be combined into a
/// closed range. All comparisons are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: BookmarkField,
    pub eq: Option<FilterValue>,
    pub gte: Option<FilterValue>,
    pub lte: Option<FilterValue>,
}

impl FieldFilter {
    pub fn new(field: BookmarkField) -> Self {
        Self {
            field,
            eq: None,
            gte: None,
            lte: None,
        }
    }

    /// Returns true if the bookmark satisfies every predicate.
    pub fn matches(&self, bookmark: &Bookmark) -> bool {
        let actual = match self.field {
            BookmarkField::CreatedAt => FilterValue::Timestamp(bookmark.created_at),
            BookmarkField::Favorites => FilterValue::Bool(bookmark.favorites),
        };

        self.eq.is_none_or(|v| v == actual)
            && self.gte.is_none_or(|v| compare(actual, v).is_some_and(|o| o.is_ge()))
            && self.lte.is_none_or(|v| compare(actual, v).is_some_and(|o| o.is_le()))
    }
}

fn compare(left: FilterValue, right: FilterValue) -> Option<std::cmp::Ordering> {
    match (left, right) {
        (FilterValue::Bool(a), FilterValue::Bool(b)) => Some(a.cmp(&b)),
        (FilterValue::Timestamp(a), FilterValue::Timestamp(b)) => Some(a.cmp(&b)),
        _ => None,
    }
}

/// Ordering of the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: BookmarkField,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            field: BookmarkField::CreatedAt,
            direction: SortDirection::Asc,
        }
    }
}

/// Complete description of a list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkQuery {
    pub fields: &'static [&'static str],
    pub filter: Option<FieldFilter>,
    pub order: SortOrder,
    pub offset: i64,
    pub limit: i64,
}

impl Default for BookmarkQuery {
    fn default() -> Self {
        Self {
            fields: &PUBLIC_FIELDS,
            filter: None,
            order: SortOrder::default(),
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Result of a counted list query: total matches plus the requested page.
#[derive(Debug, Clone, Default)]
pub struct BookmarkPage {
    pub count: i64,
    pub rows: Vec<Bookmark>,
}

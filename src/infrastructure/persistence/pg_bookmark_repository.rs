//! PostgreSQL implementation of the bookmark repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Bookmark, BookmarkPatch, NewBookmark};
use crate::domain::query::{BookmarkPage, BookmarkQuery, FieldFilter, FilterValue};
use crate::domain::repositories::BookmarkRepository;
use crate::error::AppError;

const SELECT_COLUMNS: &str = "guid, link, created_at, updated_at, description, favorites";

/// Row shape of the `bookmarks` table.
#[derive(Debug, FromRow)]
struct BookmarkRow {
    guid: Uuid,
    link: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    description: Option<String>,
    favorites: bool,
}

impl From<BookmarkRow> for Bookmark {
    fn from(r: BookmarkRow) -> Self {
        Bookmark::new(
            r.guid,
            r.link,
            r.created_at,
            r.updated_at,
            r.description,
            r.favorites,
        )
    }
}

/// PostgreSQL repository for bookmark storage.
///
/// Filter operands are always bound as parameters; only column names and sort
/// keywords taken from closed enums are spliced into SQL text.
pub struct PgBookmarkRepository {
    pool: Arc<PgPool>,
}

impl PgBookmarkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn push_value(builder: &mut QueryBuilder<'_, Postgres>, value: FilterValue) {
    match value {
        FilterValue::Bool(b) => builder.push_bind(b),
        FilterValue::Timestamp(ts) => builder.push_bind(ts),
    };
}

/// Appends ` AND <predicate>` clauses for the filter.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: Option<&FieldFilter>) {
    let Some(filter) = filter else {
        return;
    };
    let column = filter.field.column();

    for (op, value) in [("=", filter.eq), (">=", filter.gte), ("<=", filter.lte)] {
        if let Some(value) = value {
            builder.push(format!(" AND {column} {op} "));
            push_value(builder, value);
        }
    }
}

#[async_trait]
impl BookmarkRepository for PgBookmarkRepository {
    async fn create(&self, new_bookmark: NewBookmark) -> Result<Bookmark, AppError> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
            INSERT INTO bookmarks (guid, link, created_at, updated_at, description, favorites)
            VALUES ($1, $2, $3, $3, $4, $5)
            RETURNING guid, link, created_at, updated_at, description, favorites
            "#,
        )
        .bind(new_bookmark.guid)
        .bind(&new_bookmark.link)
        .bind(new_bookmark.created_at)
        .bind(&new_bookmark.description)
        .bind(new_bookmark.favorites)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, guid: Uuid) -> Result<Option<Bookmark>, AppError> {
        let row = sqlx::query_as::<_, BookmarkRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM bookmarks WHERE guid = $1"
        ))
        .bind(guid)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Bookmark::from))
    }

    async fn update(&self, guid: Uuid, patch: BookmarkPatch) -> Result<(), AppError> {
        let (set_description, description) = match patch.description {
            Some(value) => (true, value),
            None => (false, None),
        };

        sqlx::query(
            r#"
            UPDATE bookmarks
            SET link = COALESCE($2, link),
                description = CASE WHEN $3 THEN $4::text ELSE description END,
                favorites = COALESCE($5, favorites),
                updated_at = $6
            WHERE guid = $1
            "#,
        )
        .bind(guid)
        .bind(patch.link)
        .bind(set_description)
        .bind(description)
        .bind(patch.favorites)
        .bind(patch.updated_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn delete(&self, guid: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM bookmarks WHERE guid = $1")
            .bind(guid)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn find_and_count(&self, query: &BookmarkQuery) -> Result<BookmarkPage, AppError> {
        let mut count_builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM bookmarks WHERE TRUE");
        push_filter(&mut count_builder, query.filter.as_ref());

        let mut rows_builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {SELECT_COLUMNS} FROM bookmarks WHERE TRUE"
        ));
        push_filter(&mut rows_builder, query.filter.as_ref());
        rows_builder.push(format!(
            " ORDER BY {} {}, guid ASC LIMIT ",
            query.order.field.column(),
            query.order.direction.as_sql()
        ));
        rows_builder.push_bind(query.limit);
        rows_builder.push(" OFFSET ");
        rows_builder.push_bind(query.offset);

        let (count, rows) = tokio::try_join!(
            count_builder
                .build_query_scalar::<i64>()
                .fetch_one(self.pool.as_ref()),
            rows_builder
                .build_query_as::<BookmarkRow>()
                .fetch_all(self.pool.as_ref())
        )?;

        Ok(BookmarkPage {
            count,
            rows: rows.into_iter().map(Bookmark::from).collect(),
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::BookmarkField;

    #[test]
    fn test_push_filter_renders_bound_predicates() {
        let mut filter = FieldFilter::new(BookmarkField::CreatedAt);
        filter.gte = DateTime::from_timestamp_millis(1000).map(FilterValue::Timestamp);
        filter.lte = DateTime::from_timestamp_millis(2000).map(FilterValue::Timestamp);

        let mut builder = QueryBuilder::<Postgres>::new("SELECT 1 FROM bookmarks WHERE TRUE");
        push_filter(&mut builder, Some(&filter));

        assert_eq!(
            builder.sql(),
            "SELECT 1 FROM bookmarks WHERE TRUE AND created_at >= $1 AND created_at <= $2"
        );
    }

    #[test]
    fn test_push_filter_without_filter_is_noop() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT 1 FROM bookmarks WHERE TRUE");
        push_filter(&mut builder, None);
        assert_eq!(builder.sql(), "SELECT 1 FROM bookmarks WHERE TRUE");
    }
}

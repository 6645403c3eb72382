//! Generic read path over the list-query builder: one page, or one row by
//! primary key.

use crate::error::AppError;
use crate::models::TableMeta;
use crate::sql::{select_by_id, select_page, ListParams};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

/// Fetches one page of `T` per the list parameters. An empty page is not an
/// error.
pub async fn fetch_page<T>(pool: &PgPool, params: &ListParams) -> Result<Vec<T>, AppError>
where
    T: TableMeta + for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let q = select_page::<T>(params)?;
    tracing::debug!(sql = %q.sql, params = ?q.params, "list query");
    let mut query = sqlx::query_as::<_, T>(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    Ok(query.fetch_all(pool).await?)
}

/// Fetches one row of `T` by primary key, or `None` when absent.
pub async fn fetch_by_id<T>(pool: &PgPool, id: i32) -> Result<Option<T>, AppError>
where
    T: TableMeta + for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let sql = select_by_id::<T>();
    tracing::debug!(sql = %sql, id, "detail query");
    Ok(sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?)
}

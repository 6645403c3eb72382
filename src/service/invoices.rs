//! Invoice read path: hand-written SQL against the pool rather than the
//! shared builder. Semantics match the builder path; the ORDER BY column is
//! checked against the invoice allow-list and spliced in as a trusted
//! literal, since identifiers cannot be bound as parameters.

use crate::error::AppError;
use crate::models::Invoice;
use crate::sql::{escape_like, parse_sort, sortable_column, ListParams};
use sqlx::PgPool;

const SELECT_INVOICES: &str =
    "SELECT id, invoice_number, amount, invoice_date, payment_status, document FROM invoices";

/// Assembles the invoice list SQL and the optional search pattern. Split out
/// of the executor so the generated text is testable without a database.
fn list_sql(params: &ListParams) -> Result<(String, Option<String>), AppError> {
    let mut sql = String::from(SELECT_INVOICES);
    let mut pattern = None;

    if let Some(term) = params.search.as_deref().filter(|s| !s.is_empty()) {
        pattern = Some(format!("%{}%", escape_like(term)));
        sql.push_str(" WHERE (invoice_number ILIKE $1 OR payment_status ILIKE $1)");
    }

    if let Some(raw) = params.sortby.as_deref() {
        if let Some((column, direction)) = parse_sort(raw) {
            let column = sortable_column::<Invoice>(column)?;
            sql.push_str(&format!(" ORDER BY {} {}", column, direction.as_sql()));
        }
    }

    let (limit, offset) = if pattern.is_some() { (2, 3) } else { (1, 2) };
    sql.push_str(&format!(" LIMIT ${limit} OFFSET ${offset}"));
    Ok((sql, pattern))
}

/// Lists invoices with search, sort, and pagination.
pub async fn list_invoices(pool: &PgPool, params: &ListParams) -> Result<Vec<Invoice>, AppError> {
    let (sql, pattern) = list_sql(params)?;
    tracing::debug!(sql = %sql, "invoice list query");
    let mut query = sqlx::query_as::<_, Invoice>(&sql);
    if let Some(p) = &pattern {
        query = query.bind(p.as_str());
    }
    Ok(query
        .bind(params.limit)
        .bind(params.skip)
        .fetch_all(pool)
        .await?)
}

/// Fetches one invoice by primary key, or `None` when absent.
pub async fn get_invoice(pool: &PgPool, invoice_id: i32) -> Result<Option<Invoice>, AppError> {
    Ok(sqlx::query_as::<_, Invoice>(SELECT_INVOICE_BY_ID)
        .bind(invoice_id)
        .fetch_optional(pool)
        .await?)
}

const SELECT_INVOICE_BY_ID: &str =
    "SELECT id, invoice_number, amount, invoice_date, payment_status, document \
     FROM invoices WHERE id = $1";

#[cfg(test)]
mod tests {
    use super::*;

    fn params(sortby: Option<&str>, search: Option<&str>) -> ListParams {
        ListParams {
            skip: 0,
            limit: 10,
            sortby: sortby.map(String::from),
            search: search.map(String::from),
        }
    }

    #[test]
    fn plain_list_paginates_only() {
        let (sql, pattern) = list_sql(&params(None, None)).unwrap();
        assert_eq!(sql, format!("{SELECT_INVOICES} LIMIT $1 OFFSET $2"));
        assert!(pattern.is_none());
    }

    #[test]
    fn search_matches_number_and_status() {
        let (sql, pattern) = list_sql(&params(None, Some("overdue"))).unwrap();
        assert!(sql.contains("WHERE (invoice_number ILIKE $1 OR payment_status ILIKE $1)"));
        assert!(sql.ends_with("LIMIT $2 OFFSET $3"));
        assert_eq!(pattern.as_deref(), Some("%overdue%"));
    }

    #[test]
    fn sort_column_is_interpolated_after_validation() {
        let (sql, _) = list_sql(&params(Some("invoice_date:desc"), None)).unwrap();
        assert!(sql.contains("ORDER BY invoice_date DESC"));
    }

    #[test]
    fn unknown_sort_column_is_rejected() {
        assert!(list_sql(&params(Some("total:desc"), None)).is_err());
    }

    #[test]
    fn malformed_sortby_is_ignored() {
        let (sql, _) = list_sql(&params(Some("invoice_date"), None)).unwrap();
        assert!(!sql.contains("ORDER BY"));
    }
}

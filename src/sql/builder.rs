//! Builds the parameterized list query: search filter, dynamic sort,
//! pagination.

use crate::error::AppError;
use crate::models::TableMeta;
use crate::sql::params::BindValue;
use serde::Deserialize;
use utoipa::IntoParams;

/// Query-string parameters shared by every collection endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of rows to skip (zero-based).
    #[serde(default)]
    pub skip: i64,
    /// Maximum number of rows to return.
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Sort specifier, `"<column>:<direction>"`.
    pub sortby: Option<String>,
    /// Case-insensitive substring matched against the entity's text fields.
    pub search: Option<String>,
}

fn default_limit() -> i64 {
    10
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new(sql: String) -> Self {
        QueryBuf {
            sql,
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
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

/// Parses a `"<column>:<direction>"` sort specifier.
///
/// `None` when the string does not have exactly one separator; callers fall
/// back to the default order in that case. Any direction other than the exact
/// string `desc` sorts ascending.
pub fn parse_sort(raw: &str) -> Option<(&str, SortDirection)> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let direction = if parts[1] == "desc" {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    Some((parts[0], direction))
}

/// Escapes LIKE pattern operators so the user's term matches literally.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Checks a parsed sort column against the entity's allow-list and returns it
/// as a trusted literal. Unknown columns are a client error, not a storage
/// error.
pub fn sortable_column<T: TableMeta>(column: &str) -> Result<&'static str, AppError> {
    T::SORTABLE
        .iter()
        .copied()
        .find(|c| *c == column)
        .ok_or_else(|| {
            AppError::BadRequest(format!("Cannot sort by unknown column '{column}'."))
        })
}

/// SELECT one page of `T`: optional ILIKE disjunction over the searchable
/// columns, optional ORDER BY from the allow-list, LIMIT/OFFSET bound as
/// parameters.
pub fn select_page<T: TableMeta>(params: &ListParams) -> Result<QueryBuf, AppError> {
    let mut q = QueryBuf::new(format!(
        "SELECT {} FROM {}",
        T::COLUMNS.join(", "),
        T::TABLE
    ));

    if let Some(term) = params.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", escape_like(term));
        let n = q.push_param(BindValue::Text(pattern));
        let disjunction = T::SEARCHABLE
            .iter()
            .map(|col| format!("{col} ILIKE ${n}"))
            .collect::<Vec<_>>()
            .join(" OR ");
        q.sql.push_str(&format!(" WHERE ({disjunction})"));
    }

    if let Some(raw) = params.sortby.as_deref() {
        if let Some((column, direction)) = parse_sort(raw) {
            let column = sortable_column::<T>(column)?;
            q.sql
                .push_str(&format!(" ORDER BY {} {}", column, direction.as_sql()));
        }
    }

    let limit = q.push_param(BindValue::Int(params.limit));
    let offset = q.push_param(BindValue::Int(params.skip));
    q.sql.push_str(&format!(" LIMIT ${limit} OFFSET ${offset}"));
    Ok(q)
}

/// SELECT by primary key. Caller binds the id as the sole parameter.
pub fn select_by_id<T: TableMeta>() -> String {
    format!(
        "SELECT {} FROM {} WHERE id = $1",
        T::COLUMNS.join(", "),
        T::TABLE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractCompany, Sow};

    fn params(sortby: Option<&str>, search: Option<&str>) -> ListParams {
        ListParams {
            skip: 0,
            limit: 10,
            sortby: sortby.map(String::from),
            search: search.map(String::from),
        }
    }

    #[test]
    fn parse_sort_accepts_column_and_direction() {
        assert_eq!(
            parse_sort("company_name:desc"),
            Some(("company_name", SortDirection::Desc))
        );
        assert_eq!(
            parse_sort("company_name:asc"),
            Some(("company_name", SortDirection::Asc))
        );
    }

    #[test]
    fn parse_sort_treats_unknown_direction_as_ascending() {
        assert_eq!(
            parse_sort("company_name:descending"),
            Some(("company_name", SortDirection::Asc))
        );
    }

    #[test]
    fn parse_sort_rejects_wrong_separator_count() {
        assert_eq!(parse_sort("bogus"), None);
        assert_eq!(parse_sort("a:b:c"), None);
        assert_eq!(parse_sort(""), None);
    }

    #[test]
    fn escape_like_escapes_pattern_operators() {
        assert_eq!(escape_like("50%_off\\now"), "50\\%\\_off\\\\now");
        assert_eq!(escape_like("acme"), "acme");
    }

    #[test]
    fn plain_page_has_no_filter_or_order() {
        let q = select_page::<ContractCompany>(&params(None, None)).unwrap();
        assert_eq!(
            q.sql,
            "SELECT id, company_name, address, contact_person, contact_email, extra_metadata \
             FROM companies LIMIT $1 OFFSET $2"
        );
        assert_eq!(q.params, vec![BindValue::Int(10), BindValue::Int(0)]);
    }

    #[test]
    fn search_builds_ilike_disjunction_over_searchable_columns() {
        let q = select_page::<ContractCompany>(&params(None, Some("acme"))).unwrap();
        assert!(q.sql.contains(
            "WHERE (company_name ILIKE $1 OR address ILIKE $1 \
             OR contact_person ILIKE $1 OR contact_email ILIKE $1)"
        ));
        assert_eq!(q.params[0], BindValue::Text("%acme%".into()));
        // limit/offset follow the search pattern
        assert!(q.sql.ends_with("LIMIT $2 OFFSET $3"));
    }

    #[test]
    fn search_pattern_is_wildcard_escaped() {
        let q = select_page::<Sow>(&params(None, Some("100%_done"))).unwrap();
        assert_eq!(q.params[0], BindValue::Text("%100\\%\\_done%".into()));
    }

    #[test]
    fn empty_search_is_ignored() {
        let q = select_page::<ContractCompany>(&params(None, Some(""))).unwrap();
        assert!(!q.sql.contains("WHERE"));
    }

    #[test]
    fn sortby_orders_by_allowed_column() {
        let q =
            select_page::<ContractCompany>(&params(Some("company_name:desc"), None)).unwrap();
        assert!(q.sql.contains("ORDER BY company_name DESC"));
        let q = select_page::<ContractCompany>(&params(Some("id:asc"), None)).unwrap();
        assert!(q.sql.contains("ORDER BY id ASC"));
    }

    #[test]
    fn malformed_sortby_degrades_to_default_order() {
        let q = select_page::<ContractCompany>(&params(Some("bogus"), None)).unwrap();
        assert!(!q.sql.contains("ORDER BY"));
        let q = select_page::<ContractCompany>(&params(Some("id:desc:extra"), None)).unwrap();
        assert!(!q.sql.contains("ORDER BY"));
    }

    #[test]
    fn unknown_sort_column_is_a_client_error() {
        let err = select_page::<ContractCompany>(&params(Some("salary:desc"), None))
            .unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("salary")),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn pagination_values_are_bound() {
        let mut p = params(None, None);
        p.skip = 30;
        p.limit = 15;
        let q = select_page::<ContractCompany>(&p).unwrap();
        assert_eq!(q.params, vec![BindValue::Int(15), BindValue::Int(30)]);
    }

    #[test]
    fn select_by_id_targets_primary_key() {
        assert_eq!(
            select_by_id::<Sow>(),
            "SELECT id, sow_title, start_date, end_date, budget, sow_document, details \
             FROM sows WHERE id = $1"
        );
    }

    #[test]
    fn list_params_default_to_first_page() {
        let p: ListParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(p.skip, 0);
        assert_eq!(p.limit, 10);
        assert!(p.sortby.is_none());
        assert!(p.search.is_none());
    }
}

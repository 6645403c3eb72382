//! List response envelope shared by all collection endpoints.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    /// Count of the returned page, not of the whole collection.
    pub total: usize,
    pub skip: i64,
    pub limit: i64,
}

impl<T> ListResponse<T> {
    pub fn page(data: Vec<T>, skip: i64, limit: i64) -> Self {
        let total = data.len();
        ListResponse {
            data,
            total,
            skip,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_reports_page_size() {
        let page = ListResponse::page(vec![1, 2, 3], 0, 10);
        assert_eq!(page.total, 3);
        let body = serde_json::to_value(&page).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "data": [1, 2, 3], "total": 3, "skip": 0, "limit": 10 })
        );
    }
}

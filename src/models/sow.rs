use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::TableMeta;

/// Input shape for a statement of work. Only the title is required.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SowCreate {
    pub sow_title: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub sow_document: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
}

/// Update shape. Same fields as create; `id` is never updatable.
pub type SowUpdate = SowCreate;

/// A statement-of-work row as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Sow {
    pub id: i32,
    pub sow_title: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget: Option<f64>,
    pub sow_document: Option<String>,
    pub details: Option<Value>,
}

impl TableMeta for Sow {
    const TABLE: &'static str = "sows";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "sow_title",
        "start_date",
        "end_date",
        "budget",
        "sow_document",
        "details",
    ];
    const SEARCHABLE: &'static [&'static str] = &["sow_title", "sow_document"];
    const SORTABLE: &'static [&'static str] = &[
        "id",
        "sow_title",
        "start_date",
        "end_date",
        "budget",
        "sow_document",
    ];
}

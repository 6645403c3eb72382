use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::TableMeta;

/// Input shape for an invoice. Only the invoice number is required.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct InvoiceCreate {
    pub invoice_number: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub document: Option<String>,
}

/// An invoice row as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Invoice {
    pub id: i32,
    pub invoice_number: String,
    pub amount: Option<f64>,
    pub invoice_date: Option<NaiveDate>,
    pub payment_status: Option<String>,
    pub document: Option<String>,
}

impl TableMeta for Invoice {
    const TABLE: &'static str = "invoices";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "invoice_number",
        "amount",
        "invoice_date",
        "payment_status",
        "document",
    ];
    const SEARCHABLE: &'static [&'static str] = &["invoice_number", "payment_status"];
    const SORTABLE: &'static [&'static str] = &[
        "id",
        "invoice_number",
        "amount",
        "invoice_date",
        "payment_status",
    ];
}

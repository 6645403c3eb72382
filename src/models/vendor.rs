use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::TableMeta;

/// Input shape for a vendor. Only the name is required.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VendorCreate {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_type: Option<String>,
}

/// A vendor row as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Vendor {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_type: Option<String>,
}

impl TableMeta for Vendor {
    const TABLE: &'static str = "vendors";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "address",
        "contact_name",
        "contact_email",
        "contact_phone",
        "contact_type",
    ];
    const SEARCHABLE: &'static [&'static str] = &[
        "name",
        "address",
        "contact_name",
        "contact_email",
        "contact_phone",
        "contact_type",
    ];
    const SORTABLE: &'static [&'static str] = &[
        "id",
        "name",
        "address",
        "contact_name",
        "contact_email",
        "contact_phone",
        "contact_type",
    ];
}

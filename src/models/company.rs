use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::TableMeta;

/// Input shape for a company. Only the name is required.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContractCompanyCreate {
    pub company_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    /// Opaque key-value map attached by the ingestion pipeline.
    #[serde(default)]
    pub extra_metadata: Option<Value>,
}

/// A company row as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ContractCompany {
    pub id: i32,
    pub company_name: String,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub extra_metadata: Option<Value>,
}

impl TableMeta for ContractCompany {
    const TABLE: &'static str = "companies";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "company_name",
        "address",
        "contact_person",
        "contact_email",
        "extra_metadata",
    ];
    const SEARCHABLE: &'static [&'static str] =
        &["company_name", "address", "contact_person", "contact_email"];
    const SORTABLE: &'static [&'static str] = &[
        "id",
        "company_name",
        "address",
        "contact_person",
        "contact_email",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_optional_fields_to_none() {
        let c: ContractCompanyCreate =
            serde_json::from_value(serde_json::json!({ "company_name": "Acme" })).unwrap();
        assert_eq!(c.company_name, "Acme");
        assert!(c.address.is_none());
        assert!(c.contact_person.is_none());
        assert!(c.contact_email.is_none());
        assert!(c.extra_metadata.is_none());
    }

    #[test]
    fn create_requires_company_name() {
        let res: Result<ContractCompanyCreate, _> =
            serde_json::from_value(serde_json::json!({ "address": "1 Main St" }));
        assert!(res.is_err());
    }
}

//! OpenAPI document, served at the URL the Swagger UI is configured for.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Document Intelligence API",
        description = "Read-only API over companies, vendors, statements of work, and invoices",
        version = "1.0.0"
    ),
    paths(
        crate::handlers::companies::list_companies,
        crate::handlers::companies::read_company,
        crate::handlers::vendors::list_vendors,
        crate::handlers::vendors::read_vendor,
        crate::handlers::sows::list_sows,
        crate::handlers::sows::read_sow,
        crate::handlers::invoices::list_invoices,
        crate::handlers::invoices::read_invoice,
    ),
    components(schemas(
        crate::models::ContractCompany,
        crate::models::ContractCompanyCreate,
        crate::models::Vendor,
        crate::models::VendorCreate,
        crate::models::Sow,
        crate::models::SowCreate,
        crate::models::Invoice,
        crate::models::InvoiceCreate,
        crate::error::ErrorBody,
    ))
)]
pub struct ApiDoc;

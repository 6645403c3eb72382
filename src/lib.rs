//! Document intelligence REST API: read-only list and detail endpoints over
//! companies, vendors, statements of work, and invoices.

pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

pub use error::{AppError, ErrorBody};
pub use response::ListResponse;
pub use routes::{common_routes, company_routes, invoice_routes, sow_routes, vendor_routes};
pub use sql::ListParams;
pub use state::AppState;

//! Read-only query execution against PostgreSQL.

mod invoices;
mod list;
pub use invoices::{get_invoice, list_invoices};
pub use list::{fetch_by_id, fetch_page};

//! Router construction: common routes plus one router per entity.

mod common;
mod entity;
pub use common::common_routes;
pub use entity::{company_routes, invoice_routes, sow_routes, vendor_routes};

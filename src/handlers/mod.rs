//! HTTP handlers, one module per entity.

pub mod companies;
pub mod invoices;
pub mod sows;
pub mod vendors;

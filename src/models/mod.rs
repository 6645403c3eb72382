//! Typed entity shapes for the API boundary, one module per table.

pub mod company;
pub mod invoice;
pub mod sow;
pub mod vendor;

pub use company::{ContractCompany, ContractCompanyCreate};
pub use invoice::{Invoice, InvoiceCreate};
pub use sow::{Sow, SowCreate, SowUpdate};
pub use vendor::{Vendor, VendorCreate};

/// Compile-time table metadata driving list-query construction.
///
/// Identifiers listed here are trusted literals; user input is only ever
/// matched against these slices, never spliced into SQL directly.
pub trait TableMeta {
    /// Table name.
    const TABLE: &'static str;
    /// Columns in SELECT order.
    const COLUMNS: &'static [&'static str];
    /// Text columns eligible for substring matching via `search`.
    const SEARCHABLE: &'static [&'static str];
    /// Columns accepted by `sortby`.
    const SORTABLE: &'static [&'static str];
}

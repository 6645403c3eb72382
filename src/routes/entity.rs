//! Entity routers: one collection route and one detail route per entity.

use crate::handlers::{companies, invoices, sows, vendors};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn company_routes(state: AppState) -> Router {
    Router::new()
        .route("/companies", get(companies::list_companies))
        .route("/companies/:id", get(companies::read_company))
        .with_state(state)
}

pub fn vendor_routes(state: AppState) -> Router {
    Router::new()
        .route("/vendors", get(vendors::list_vendors))
        .route("/vendors/:id", get(vendors::read_vendor))
        .with_state(state)
}

pub fn sow_routes(state: AppState) -> Router {
    Router::new()
        .route("/sows", get(sows::list_sows))
        .route("/sows/:id", get(sows::read_sow))
        .with_state(state)
}

pub fn invoice_routes(state: AppState) -> Router {
    Router::new()
        .route("/invoices", get(invoices::list_invoices))
        .route("/invoices/:id", get(invoices::read_invoice))
        .with_state(state)
}

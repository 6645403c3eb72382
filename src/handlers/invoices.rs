//! Invoice endpoints. These go through the pool-path service rather than the
//! generic builder.

use crate::error::AppError;
use crate::models::Invoice;
use crate::response::ListResponse;
use crate::service;
use crate::sql::ListParams;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;

/// Retrieves a page of invoices.
#[utoipa::path(
    get,
    path = "/invoices",
    params(ListParams),
    responses((status = 200, description = "A page of invoices")),
    tag = "Invoices"
)]
pub async fn list_invoices(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<Invoice>>, AppError> {
    let rows = service::list_invoices(&state.pool, &params).await?;
    Ok(Json(ListResponse::page(rows, params.skip, params.limit)))
}

/// Retrieves an invoice by id.
#[utoipa::path(
    get,
    path = "/invoices/{id}",
    params(("id" = i32, Path, description = "Invoice id")),
    responses(
        (status = 200, body = Invoice),
        (status = 404, body = crate::error::ErrorBody, description = "No invoice with that id")
    ),
    tag = "Invoices"
)]
pub async fn read_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<i32>,
) -> Result<Json<Invoice>, AppError> {
    let invoice = service::get_invoice(&state.pool, invoice_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "An invoice with an id of {invoice_id} was not found."
            ))
        })?;
    Ok(Json(invoice))
}

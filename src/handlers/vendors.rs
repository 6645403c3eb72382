//! Vendor endpoints.

use crate::error::AppError;
use crate::models::Vendor;
use crate::response::ListResponse;
use crate::service;
use crate::sql::ListParams;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;

/// Retrieves a page of vendors.
#[utoipa::path(
    get,
    path = "/vendors",
    params(ListParams),
    responses((status = 200, description = "A page of vendors")),
    tag = "Vendors"
)]
pub async fn list_vendors(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<Vendor>>, AppError> {
    let rows = service::fetch_page(&state.pool, &params).await?;
    Ok(Json(ListResponse::page(rows, params.skip, params.limit)))
}

/// Retrieves a vendor by id.
#[utoipa::path(
    get,
    path = "/vendors/{id}",
    params(("id" = i32, Path, description = "Vendor id")),
    responses(
        (status = 200, body = Vendor),
        (status = 404, body = crate::error::ErrorBody, description = "No vendor with that id")
    ),
    tag = "Vendors"
)]
pub async fn read_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
) -> Result<Json<Vendor>, AppError> {
    let vendor = service::fetch_by_id::<Vendor>(&state.pool, vendor_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("A vendor with an id of {vendor_id} was not found."))
        })?;
    Ok(Json(vendor))
}

//! Statement-of-work endpoints.

use crate::error::AppError;
use crate::models::Sow;
use crate::response::ListResponse;
use crate::service;
use crate::sql::ListParams;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;

/// Retrieves a page of statements of work.
#[utoipa::path(
    get,
    path = "/sows",
    params(ListParams),
    responses((status = 200, description = "A page of statements of work")),
    tag = "Sows"
)]
pub async fn list_sows(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<Sow>>, AppError> {
    let rows = service::fetch_page(&state.pool, &params).await?;
    Ok(Json(ListResponse::page(rows, params.skip, params.limit)))
}

/// Retrieves a statement of work by id.
#[utoipa::path(
    get,
    path = "/sows/{id}",
    params(("id" = i32, Path, description = "Statement of work id")),
    responses(
        (status = 200, body = Sow),
        (status = 404, body = crate::error::ErrorBody, description = "No SOW with that id")
    ),
    tag = "Sows"
)]
pub async fn read_sow(
    State(state): State<AppState>,
    Path(sow_id): Path<i32>,
) -> Result<Json<Sow>, AppError> {
    let sow = service::fetch_by_id::<Sow>(&state.pool, sow_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("A SOW with an id of {sow_id} was not found."))
        })?;
    Ok(Json(sow))
}

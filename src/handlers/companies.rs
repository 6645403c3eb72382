//! Company endpoints.

use crate::error::AppError;
use crate::models::ContractCompany;
use crate::response::ListResponse;
use crate::service;
use crate::sql::ListParams;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;

/// Retrieves a page of companies.
#[utoipa::path(
    get,
    path = "/companies",
    params(ListParams),
    responses((status = 200, description = "A page of companies")),
    tag = "Companies"
)]
pub async fn list_companies(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<ContractCompany>>, AppError> {
    let rows = service::fetch_page(&state.pool, &params).await?;
    Ok(Json(ListResponse::page(rows, params.skip, params.limit)))
}

/// Retrieves a company by id.
#[utoipa::path(
    get,
    path = "/companies/{id}",
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 200, body = ContractCompany),
        (status = 404, body = crate::error::ErrorBody, description = "No company with that id")
    ),
    tag = "Companies"
)]
pub async fn read_company(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> Result<Json<ContractCompany>, AppError> {
    let company = service::fetch_by_id::<ContractCompany>(&state.pool, company_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "A company with an id of {company_id} was not found."
            ))
        })?;
    Ok(Json(company))
}

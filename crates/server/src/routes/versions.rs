use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use catalog::{domain::CreateVersionInput, params::RawPageParams};
use common::types::Envelope;
use models::version;

use crate::{auth::Caller, errors::ApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/services/{serviceId}/versions", tag = "versions",
    params(
        ("serviceId" = String, Path, description = "Service ULID"),
        ("page_size_limit" = Option<String>, Query, description = "Rows per page, 1..=100 (default 25)"),
        ("page_number" = Option<String>, Query, description = "1-based page (default 1)"),
    ),
    responses(
        (status = 200, description = "List OK", body = crate::openapi::VersionListDoc),
        (status = 400, description = "Validation Error"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Caller(_identity): Caller,
    Path(service_id): Path<String>,
    query: Result<Query<RawPageParams>, QueryRejection>,
) -> Result<Json<Envelope<Vec<version::Model>>>, ApiError> {
    let Query(raw) = query?;
    let (rows, pagination) = state
        .catalog
        .list_service_versions(&service_id, &raw)
        .await
        .map_err(|e| ApiError::from_service(e, "Unable to fetch service versions."))?;
    let meta = pagination.meta(rows.len());
    Ok(Json(Envelope::paged(rows, meta)))
}

#[utoipa::path(
    post, path = "/services/{serviceId}/versions", tag = "versions",
    params(("serviceId" = String, Path, description = "Service ULID")),
    request_body = crate::openapi::CreateVersionDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::VersionEnvelopeDoc),
        (status = 400, description = "Validation Error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Service Not Found"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Caller(identity): Caller,
    Path(service_id): Path<String>,
    payload: Result<Json<CreateVersionInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<version::Model>>), ApiError> {
    let Json(input) = payload?;
    let created = state
        .catalog
        .create_version(identity, &service_id, input)
        .await
        .map_err(|e| ApiError::from_service(e, "Unable to create version."))?;
    Ok((StatusCode::CREATED, Json(Envelope::success(created))))
}

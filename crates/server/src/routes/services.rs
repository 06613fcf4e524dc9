use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use catalog::{domain::CreateServiceInput, params::RawListParams};
use common::types::Envelope;
use models::service;

use crate::{auth::Caller, errors::ApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/services", tag = "services",
    params(
        ("page_size_limit" = Option<String>, Query, description = "Rows per page, 1..=100 (default 25)"),
        ("page_number" = Option<String>, Query, description = "1-based page (default 1)"),
        ("sort" = Option<String>, Query, description = "id | name | created_at | updated_at | version_count"),
        ("order" = Option<String>, Query, description = "asc | desc"),
        ("filter_field" = Option<String>, Query, description = "name | description"),
        ("filter_value" = Option<String>, Query, description = "Exact value to match"),
    ),
    responses(
        (status = 200, description = "List OK", body = crate::openapi::ServiceListDoc),
        (status = 400, description = "Validation Error"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Caller(identity): Caller,
    query: Result<Query<RawListParams>, QueryRejection>,
) -> Result<Json<Envelope<Vec<service::Model>>>, ApiError> {
    let Query(raw) = query?;
    let (rows, pagination) = state
        .catalog
        .list_services(identity, &raw)
        .await
        .map_err(|e| ApiError::from_service(e, "Unable to load services."))?;
    let meta = pagination.meta(rows.len());
    Ok(Json(Envelope::paged(rows, meta)))
}

#[utoipa::path(
    post, path = "/services", tag = "services",
    request_body = crate::openapi::CreateServiceDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServiceEnvelopeDoc),
        (status = 400, description = "Validation Error"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Caller(identity): Caller,
    payload: Result<Json<CreateServiceInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<service::Model>>), ApiError> {
    let Json(input) = payload?;
    let created = state
        .catalog
        .create_service(identity, input)
        .await
        .map_err(|e| ApiError::from_service(e, "Unable to create service."))?;
    Ok((StatusCode::CREATED, Json(Envelope::success(created))))
}

#[utoipa::path(
    get, path = "/services/{serviceId}", tag = "services",
    params(("serviceId" = String, Path, description = "Service ULID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServiceEnvelopeDoc),
        (status = 400, description = "Invalid id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Load Failed")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Caller(_identity): Caller,
    Path(service_id): Path<String>,
) -> Result<Json<Envelope<service::Model>>, ApiError> {
    let found = state
        .catalog
        .get_service(&service_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Unable to load service."))?;
    Ok(Json(Envelope::success(found)))
}

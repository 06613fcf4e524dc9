use axum::{
    middleware,
    routing::get,
    Json, Router,
};
use catalog::{catalog_service::CatalogService, domain::Identity, store::SeaOrmCatalogRepository};
use common::types::{Envelope, Pong};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::{auth, openapi::ApiDoc};

pub mod services;
pub mod versions;

#[derive(Clone)]
pub struct ServerState {
    pub catalog: CatalogService<SeaOrmCatalogRepository>,
    pub identity: Identity,
}

#[utoipa::path(get, path = "/ping", tag = "health", responses((status = 200, description = "pong")))]
pub async fn ping() -> Json<Envelope<Pong>> {
    Json(Envelope::success(Pong { message: "pong" }))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Catalog routes without the identity layer.
pub fn api_routes() -> Router<ServerState> {
    Router::new()
        .route("/services", get(services::list).post(services::create))
        .route("/services/:serviceId", get(services::get))
        .route("/services/:serviceId/versions", get(versions::list).post(versions::create))
}

/// Build the full application router: public routes, catalog routes behind the identity
/// stub, tracing and CORS.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/ping", get(ping))
        .route("/api-docs/openapi.json", get(openapi_json));

    let api = api_routes().layer(middleware::from_fn_with_state(state.identity, auth::inject_identity));

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}

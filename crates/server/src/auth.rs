//! Authentication stub.
//!
//! No credentials are checked: a middleware stamps the configured identity onto every
//! request and handlers pull it back out with [`Caller`].

use axum::async_trait;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use catalog::domain::Identity;

use crate::errors::ApiError;

pub async fn inject_identity(State(identity): State<Identity>, mut req: Request, next: Next) -> Response {
    req.extensions_mut().insert(identity);
    next.run(req).await
}

/// Identity of the caller; rejects with 401 when the auth layer did not run.
#[derive(Debug, Clone, Copy)]
pub struct Caller(pub Identity);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .copied()
            .map(Caller)
            .ok_or_else(|| ApiError::unauthorized("User is not authorized."))
    }
}

//! Entity store: persistence of services and versions.

use async_trait::async_trait;

use crate::domain::{NewService, NewVersion};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::params::ListParams;

pub mod seaorm;

pub use seaorm::SeaOrmCatalogRepository;

/// Repository abstraction over catalog persistence.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn create_service(&self, input: NewService) -> Result<models::service::Model, ServiceError>;

    /// Fails with `NotFound` for unknown or soft-deleted ids.
    async fn get_service(&self, id: &str) -> Result<models::service::Model, ServiceError>;

    async fn list_services(&self, organization_id: i32, params: &ListParams) -> Result<Vec<models::service::Model>, ServiceError>;

    /// Inserts the version and bumps the parent's `version_count` as one unit.
    async fn create_version(&self, input: NewVersion) -> Result<models::version::Model, ServiceError>;

    async fn list_service_versions(&self, service_id: &str, pagination: Pagination) -> Result<Vec<models::version::Model>, ServiceError>;
}

use std::sync::Arc;

use models::{ids, service, version};
use tracing::{info, instrument};

use crate::domain::{CreateServiceInput, CreateVersionInput, Identity, NewService, NewVersion};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::params::{self, RawListParams, RawPageParams};
use crate::store::CatalogRepository;

/// Application service encapsulating catalog business rules.
/// Validates untrusted input before anything reaches the repository.
pub struct CatalogService<R: CatalogRepository> {
    repo: Arc<R>,
}

impl<R: CatalogRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

/// Canonical form of a caller-supplied service id.
pub fn parse_service_id(raw: &str) -> Result<String, ServiceError> {
    ids::parse_id(raw).map_err(|_| ServiceError::validation("invalid service id"))
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, raw), fields(organization_id = identity.organization_id))]
    pub async fn list_services(
        &self,
        identity: Identity,
        raw: &RawListParams,
    ) -> Result<(Vec<service::Model>, Pagination), ServiceError> {
        let params = params::validate_list(raw)?;
        let rows = self.repo.list_services(identity.organization_id, &params).await?;
        info!(count = rows.len(), page = params.pagination.page(), "listed services");
        Ok((rows, params.pagination))
    }

    #[instrument(skip(self, input), fields(organization_id = identity.organization_id, user_id = identity.user_id))]
    pub async fn create_service(&self, identity: Identity, input: CreateServiceInput) -> Result<service::Model, ServiceError> {
        service::validate_name(&input.name)?;
        service::validate_description(&input.description)?;
        let created = self
            .repo
            .create_service(NewService {
                name: input.name,
                description: input.description,
                user_id: identity.user_id,
                organization_id: identity.organization_id,
            })
            .await?;
        info!(id = %created.id, "created service");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_service(&self, raw_id: &str) -> Result<service::Model, ServiceError> {
        let id = parse_service_id(raw_id)?;
        self.repo.get_service(&id).await
    }

    #[instrument(skip(self, input), fields(organization_id = identity.organization_id, user_id = identity.user_id))]
    pub async fn create_version(
        &self,
        identity: Identity,
        raw_service_id: &str,
        input: CreateVersionInput,
    ) -> Result<version::Model, ServiceError> {
        let service_id = parse_service_id(raw_service_id)?;
        version::validate_name(&input.name)?;
        let created = self
            .repo
            .create_version(NewVersion {
                name: input.name,
                service_id,
                user_id: identity.user_id,
                organization_id: identity.organization_id,
            })
            .await?;
        info!(id = %created.id, service_id = %created.service_id, "created version");
        Ok(created)
    }

    /// Paged versions of a service. Only pagination is accepted on this path.
    #[instrument(skip(self, raw))]
    pub async fn list_service_versions(
        &self,
        raw_service_id: &str,
        raw: &RawPageParams,
    ) -> Result<(Vec<version::Model>, Pagination), ServiceError> {
        let service_id = parse_service_id(raw_service_id)?;
        let pagination = params::validate_page(raw)?;
        let rows = self.repo.list_service_versions(&service_id, pagination).await?;
        Ok((rows, pagination))
    }
}

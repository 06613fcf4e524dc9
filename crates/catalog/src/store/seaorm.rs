use async_trait::async_trait;
use chrono::Utc;
use models::{service, version};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};
use tracing::{debug, warn};

use super::CatalogRepository;
use crate::domain::{NewService, NewVersion};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::params::ListParams;
use crate::query;

/// SeaORM-backed repository. The connection is injected; nothing is global.
#[derive(Clone)]
pub struct SeaOrmCatalogRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn create_service(&self, input: NewService) -> Result<service::Model, ServiceError> {
        let created = service::create(&self.db, &input.name, &input.description, input.user_id, input.organization_id).await?;
        Ok(created)
    }

    async fn get_service(&self, id: &str) -> Result<service::Model, ServiceError> {
        service::Entity::find_by_id(id.to_string())
            .filter(service::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("service"))
    }

    async fn list_services(&self, organization_id: i32, params: &ListParams) -> Result<Vec<service::Model>, ServiceError> {
        Ok(query::services_page(organization_id, params).all(&self.db).await?)
    }

    async fn create_version(&self, input: NewVersion) -> Result<version::Model, ServiceError> {
        let txn = self.db.begin().await?;

        // Counter first: the UPDATE takes the row lock, so concurrent creations queue
        // here instead of losing increments.
        let bumped = service::Entity::update_many()
            .col_expr(service::Column::VersionCount, Expr::col(service::Column::VersionCount).add(1))
            .col_expr(service::Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(service::Column::Id.eq(input.service_id.as_str()))
            .filter(service::Column::DeletedAt.is_null())
            .exec(&txn)
            .await;

        let bumped = match bumped {
            Ok(res) => res,
            Err(e) => {
                txn.rollback().await?;
                return Err(e.into());
            }
        };
        if bumped.rows_affected != 1 {
            txn.rollback().await?;
            debug!(service_id = %input.service_id, "version target service missing");
            return Err(ServiceError::not_found("service"));
        }

        match version::insert(&txn, &input.name, &input.service_id, input.user_id, input.organization_id).await {
            Ok(created) => {
                txn.commit().await?;
                Ok(created)
            }
            Err(e) => {
                warn!(service_id = %input.service_id, error = %e, "version insert failed; rolling back counter");
                txn.rollback().await?;
                Err(e.into())
            }
        }
    }

    async fn list_service_versions(&self, service_id: &str, pagination: Pagination) -> Result<Vec<version::Model>, ServiceError> {
        Ok(query::service_versions_page(service_id, pagination).all(&self.db).await?)
    }
}

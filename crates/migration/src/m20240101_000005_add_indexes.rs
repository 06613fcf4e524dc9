use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Users: index on organization_id
        manager
            .create_index(
                Index::create()
                    .name("idx_user_organization")
                    .table(User::Table)
                    .col(User::OrganizationId)
                    .to_owned(),
            )
            .await?;

        // Service listing is always scoped by organization
        manager
            .create_index(
                Index::create()
                    .name("idx_service_organization")
                    .table(Service::Table)
                    .col(Service::OrganizationId)
                    .to_owned(),
            )
            .await?;

        // Version listing filters by service_id
        manager
            .create_index(
                Index::create()
                    .name("idx_version_service")
                    .table(Version::Table)
                    .col(Version::ServiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_user_organization").table(User::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_organization").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_version_service").table(Version::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum User { Table, OrganizationId }

#[derive(DeriveIden)]
enum Service { Table, OrganizationId }

#[derive(DeriveIden)]
enum Version { Table, ServiceId }

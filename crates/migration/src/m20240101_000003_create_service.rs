//! Create `service` table.
//!
//! Keyed by a 26-char ULID. `version_count` is a denormalized counter bumped only by
//! version creation.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(string_len(Service::Id, 26).primary_key())
                    .col(string_len(Service::Name, 256).not_null())
                    .col(string_len(Service::Description, 1024).not_null())
                    .col(integer(Service::UserId).not_null())
                    .col(integer(Service::OrganizationId).not_null())
                    .col(integer(Service::VersionCount).default(0).not_null())
                    .col(timestamp_with_time_zone(Service::CreatedAt).default(Expr::current_timestamp()).not_null())
                    .col(timestamp_with_time_zone(Service::UpdatedAt).default(Expr::current_timestamp()).not_null())
                    .col(
                        ColumnDef::new(Service::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .check(Expr::col(Service::VersionCount).gte(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_organization")
                            .from(Service::Table, Service::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_user")
                            .from(Service::Table, Service::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Service::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
    Name,
    Description,
    UserId,
    OrganizationId,
    VersionCount,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum Organization { Table, Id }

#[derive(DeriveIden)]
enum User { Table, Id }

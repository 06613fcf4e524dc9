#![cfg(test)]
use sea_orm::DatabaseConnection;

use crate::domain::Identity;

pub const IDENTITY: Identity = Identity { user_id: 1, organization_id: 1 };

/// Private in-memory database per test, migrated and seeded with `IDENTITY`'s
/// organization and user.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    models::organization::ensure(&db, IDENTITY.organization_id, "Poppy Corp.").await?;
    models::user::ensure(&db, IDENTITY.user_id, IDENTITY.organization_id, "user_1@poppycorp.com", "Poppy").await?;
    Ok(db)
}

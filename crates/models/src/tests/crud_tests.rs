use crate::db::connect_in_memory;
use crate::{errors::ModelError, organization, service, user, version};
use anyhow::Result;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

#[tokio::test]
async fn test_organization_and_user_crud() -> Result<()> {
    let db = connect_in_memory().await?;

    let org = organization::create(&db, "Poppy Corp.").await?;
    assert_eq!(org.name, "Poppy Corp.");
    assert!(org.deleted_at.is_none());

    let u = user::create(&db, org.id, "user_1@poppycorp.com", "Poppy").await?;
    assert_eq!(u.organization_id, org.id);

    let found = user::Entity::find()
        .filter(user::Column::Email.eq("user_1@poppycorp.com"))
        .one(&db)
        .await?;
    assert_eq!(found.map(|f| f.id), Some(u.id));
    Ok(())
}

#[tokio::test]
async fn test_ensure_is_idempotent() -> Result<()> {
    let db = connect_in_memory().await?;

    let first = organization::ensure(&db, 1, "Default Organization").await?;
    let again = organization::ensure(&db, 1, "Renamed").await?;
    assert_eq!(first.id, 1);
    assert_eq!(again.name, "Default Organization");

    let u1 = user::ensure(&db, 1, 1, "owner@example.com", "Owner").await?;
    let u2 = user::ensure(&db, 1, 1, "other@example.com", "Other").await?;
    assert_eq!(u1, u2);
    assert_eq!(organization::Entity::find().all(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_user_validation() -> Result<()> {
    let db = connect_in_memory().await?;
    let org = organization::create(&db, "acme").await?;

    let err = user::create(&db, org.id, "no-at-sign", "Bob").await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    let err = user::create(&db, org.id, "bob@example.com", "   ").await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    Ok(())
}

#[tokio::test]
async fn test_service_create_defaults() -> Result<()> {
    let db = connect_in_memory().await?;
    let org = organization::create(&db, "acme").await?;
    let u = user::create(&db, org.id, "bob@example.com", "Bob").await?;

    let s = service::create(&db, "Catalog", "x", u.id, org.id).await?;
    assert_eq!(s.id.len(), crate::ids::ID_LEN);
    assert_eq!(s.version_count, 0);
    assert!(s.deleted_at.is_none());

    let found = service::Entity::find_by_id(s.id.clone()).one(&db).await?;
    assert_eq!(found, Some(s));
    Ok(())
}

#[tokio::test]
async fn test_service_field_limits() -> Result<()> {
    assert!(service::validate_name("").is_err());
    assert!(service::validate_name(&"a".repeat(255)).is_ok());
    assert!(service::validate_name(&"a".repeat(256)).is_err());
    assert!(service::validate_description("").is_ok());
    assert!(service::validate_description(&"d".repeat(1024)).is_ok());
    assert!(service::validate_description(&"d".repeat(1025)).is_err());
    assert!(version::validate_name(&"v".repeat(256)).is_ok());
    assert!(version::validate_name(&"v".repeat(257)).is_err());
    assert!(version::validate_name("").is_err());
    Ok(())
}

#[tokio::test]
async fn test_version_requires_existing_service() -> Result<()> {
    let db = connect_in_memory().await?;
    let org = organization::create(&db, "acme").await?;
    let u = user::create(&db, org.id, "bob@example.com", "Bob").await?;

    let missing = crate::ids::new_id();
    let err = version::insert(&db, "v1.0.0", &missing, u.id, org.id).await.unwrap_err();
    assert!(matches!(err, ModelError::Db(_)));
    Ok(())
}

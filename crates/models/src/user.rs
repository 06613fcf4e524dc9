use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::organization;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub organization_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Organization,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Organization => Entity::belongs_to(organization::Entity).from(Column::OrganizationId).to(organization::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if !email.contains('@') { return Err(errors::ModelError::Validation("invalid email".into())); }
    if email.chars().count() > 512 { return Err(errors::ModelError::Validation("email must be at most 512 characters".into())); }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    if name.chars().count() > 255 { return Err(errors::ModelError::Validation("name must be at most 255 characters".into())); }
    Ok(())
}

fn active(id: Option<i32>, organization_id: i32, email: &str, name: &str) -> ActiveModel {
    let now = Utc::now().into();
    let mut am = ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        organization_id: Set(organization_id),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
        ..Default::default()
    };
    if let Some(id) = id { am.id = Set(id); }
    am
}

pub async fn create<C: ConnectionTrait>(db: &C, organization_id: i32, email: &str, name: &str) -> Result<Model, errors::ModelError> {
    validate_email(email)?;
    validate_name(name)?;
    active(None, organization_id, email, name).insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Fetch the user with `id`, inserting it under that id when missing.
pub async fn ensure<C: ConnectionTrait>(db: &C, id: i32, organization_id: i32, email: &str, name: &str) -> Result<Model, errors::ModelError> {
    if let Some(found) = Entity::find_by_id(id).one(db).await? {
        return Ok(found);
    }
    validate_email(email)?;
    validate_name(name)?;
    active(Some(id), organization_id, email, name).insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, ids, organization, user};

pub const NAME_MAX: usize = 255;
pub const DESCRIPTION_MAX: usize = 1024;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub user_id: i32,
    pub organization_id: i32,
    /// Non-deleted versions pointing at this service. Only version creation touches it.
    pub version_count: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Organization, User }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Organization => Entity::belongs_to(organization::Entity)
                .from(Column::OrganizationId)
                .to(organization::Column::Id)
                .into(),
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.is_empty() { return Err(errors::ModelError::Validation("name is required".into())); }
    if name.chars().count() > NAME_MAX {
        return Err(errors::ModelError::Validation(format!("name must be at most {NAME_MAX} characters")));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), errors::ModelError> {
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(errors::ModelError::Validation(format!("description must be at most {DESCRIPTION_MAX} characters")));
    }
    Ok(())
}

/// Insert a new service with a freshly minted id and `version_count = 0`.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    name: &str,
    description: &str,
    user_id: i32,
    organization_id: i32,
) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_description(description)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(ids::new_id()),
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        user_id: Set(user_id),
        organization_id: Set(organization_id),
        version_count: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

use serde::{Deserialize, Deserializer};

/// Caller identity supplied by the authentication layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub organization_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateServiceInput {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Absent and `null` both mean an empty description.
fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateVersionInput {
    pub name: String,
}

/// Validated service insert.
#[derive(Debug, Clone)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub user_id: i32,
    pub organization_id: i32,
}

/// Validated version insert; `service_id` is canonical.
#[derive(Debug, Clone)]
pub struct NewVersion {
    pub name: String,
    pub service_id: String,
    pub user_id: i32,
    pub organization_id: i32,
}

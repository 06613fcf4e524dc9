use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct CreateServiceDoc {
    /// 1..=255 characters
    pub name: String,
    /// up to 1024 characters
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct CreateVersionDoc {
    /// 1..=256 characters
    pub name: String,
}

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: String,
    pub name: String,
    pub description: String,
    pub user_id: i32,
    pub organization_id: i32,
    pub version_count: i32,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

#[derive(ToSchema)]
pub struct VersionDoc {
    pub id: String,
    pub name: String,
    pub service_id: String,
    pub user_id: i32,
    pub organization_id: i32,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

#[derive(ToSchema)]
pub struct PageMetaDoc {
    pub page_number: u64,
    pub page_size: u64,
    pub page_size_limit: u64,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub message: String }

#[derive(ToSchema)]
pub struct ServiceEnvelopeDoc {
    pub data: Option<ServiceDoc>,
    pub meta: Option<PageMetaDoc>,
    pub error: Option<ErrorDoc>,
}

#[derive(ToSchema)]
pub struct ServiceListDoc {
    pub data: Option<Vec<ServiceDoc>>,
    pub meta: Option<PageMetaDoc>,
    pub error: Option<ErrorDoc>,
}

#[derive(ToSchema)]
pub struct VersionEnvelopeDoc {
    pub data: Option<VersionDoc>,
    pub meta: Option<PageMetaDoc>,
    pub error: Option<ErrorDoc>,
}

#[derive(ToSchema)]
pub struct VersionListDoc {
    pub data: Option<Vec<VersionDoc>>,
    pub meta: Option<PageMetaDoc>,
    pub error: Option<ErrorDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::ping,
        crate::routes::services::list,
        crate::routes::services::create,
        crate::routes::services::get,
        crate::routes::versions::list,
        crate::routes::versions::create,
    ),
    components(
        schemas(
            CreateServiceDoc,
            CreateVersionDoc,
            ServiceDoc,
            VersionDoc,
            PageMetaDoc,
            ErrorDoc,
            ServiceEnvelopeDoc,
            ServiceListDoc,
            VersionEnvelopeDoc,
            VersionListDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "services"),
        (name = "versions")
    )
)]
pub struct ApiDoc;

//! Validation of untrusted list parameters.
//!
//! Sort and filter fields are resolved to closed enums here; nothing downstream ever sees
//! the caller's raw field names.

use serde::Deserialize;

use crate::errors::ServiceError;
use crate::pagination::{Pagination, DEFAULT_PAGE_SIZE};

/// Query string of `GET /services`, exactly as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListParams {
    pub page_size_limit: Option<String>,
    pub page_number: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub filter_field: Option<String>,
    pub filter_value: Option<String>,
}

/// Query string of `GET /services/:id/versions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPageParams {
    pub page_size_limit: Option<String>,
    pub page_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
    VersionCount,
}

impl SortField {
    pub const ALLOWED: &'static str = "[id, name, created_at, updated_at, version_count]";

    /// `id` and `name` match case-insensitively, the timestamp/counter fields exactly.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            "version_count" => Some(Self::VersionCount),
            _ if raw.eq_ignore_ascii_case("id") => Some(Self::Id),
            _ if raw.eq_ignore_ascii_case("name") => Some(Self::Name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Name,
    Description,
}

impl FilterField {
    pub const ALLOWED: &'static str = "[name, description]";

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "name" => Some(Self::Name),
            "description" => Some(Self::Description),
            _ => None,
        }
    }
}

/// Exact-match equality predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: FilterField,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub pagination: Pagination,
    pub sort: SortField,
    pub order: SortOrder,
    pub filter: Option<Filter>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self { pagination: Pagination::default(), sort: SortField::Id, order: SortOrder::Asc, filter: None }
    }
}

fn parse_int(raw: Option<&str>, default: i64) -> Option<i64> {
    match raw {
        None => Some(default),
        Some(s) => s.parse::<i64>().ok(),
    }
}

fn invalid_page_number() -> ServiceError {
    ServiceError::validation("invalid page number: page_number must be >= 1")
}

/// Validate pagination only. Unparseable numbers count as out of range.
pub fn validate_page(raw: &RawPageParams) -> Result<Pagination, ServiceError> {
    let page = parse_int(raw.page_number.as_deref(), 1).ok_or_else(invalid_page_number)?;
    let per_page = parse_int(raw.page_size_limit.as_deref(), DEFAULT_PAGE_SIZE as i64).unwrap_or(0);
    Pagination::new(page, per_page)
}

/// Validate every service listing parameter, applying defaults for absent ones.
pub fn validate_list(raw: &RawListParams) -> Result<ListParams, ServiceError> {
    let pagination = validate_page(&RawPageParams {
        page_size_limit: raw.page_size_limit.clone(),
        page_number: raw.page_number.clone(),
    })?;

    let sort = match raw.sort.as_deref() {
        None => SortField::Id,
        Some(s) => SortField::parse(s).ok_or_else(|| {
            ServiceError::validation(format!("invalid sort field: must be one of {}", SortField::ALLOWED))
        })?,
    };

    let order = match raw.order.as_deref() {
        None => SortOrder::Asc,
        Some(s) => SortOrder::parse(s)
            .ok_or_else(|| ServiceError::validation("invalid sort order: must be one of [asc, desc]"))?,
    };

    let field = raw.filter_field.as_deref().unwrap_or_default();
    let value = raw.filter_value.as_deref().unwrap_or_default();
    let filter = if field.is_empty() && value.is_empty() {
        None
    } else {
        let field = FilterField::parse(field).ok_or_else(|| {
            ServiceError::validation(format!("invalid filter field: must be one of {}", FilterField::ALLOWED))
        })?;
        // a known field with an empty value filters nothing
        (!value.is_empty()).then(|| Filter { field, value: value.to_string() })
    };

    Ok(ListParams { pagination, sort, order, filter })
}

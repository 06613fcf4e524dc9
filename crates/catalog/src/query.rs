//! Builds the paged selects behind the list endpoints.
//!
//! Allow-listed sort/filter fields map onto entity columns; the only caller data that
//! reaches SQL is bound as parameter values.

use models::{service, version};
use sea_orm::{ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select};

use crate::pagination::Pagination;
use crate::params::{FilterField, ListParams, SortField, SortOrder};

fn sort_column(field: SortField) -> service::Column {
    match field {
        SortField::Id => service::Column::Id,
        SortField::Name => service::Column::Name,
        SortField::CreatedAt => service::Column::CreatedAt,
        SortField::UpdatedAt => service::Column::UpdatedAt,
        SortField::VersionCount => service::Column::VersionCount,
    }
}

fn filter_column(field: FilterField) -> service::Column {
    match field {
        FilterField::Name => service::Column::Name,
        FilterField::Description => service::Column::Description,
    }
}

fn direction(order: SortOrder) -> Order {
    match order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

fn paged<E: EntityTrait>(select: Select<E>, p: Pagination) -> Select<E> {
    select.offset(p.offset()).limit(p.per_page())
}

/// Non-deleted services of one organization, filtered, sorted and paged.
///
/// Ties on the sort column fall back to `id ASC`.
pub fn services_page(organization_id: i32, params: &ListParams) -> Select<service::Entity> {
    let mut select = service::Entity::find()
        .filter(service::Column::DeletedAt.is_null())
        .filter(service::Column::OrganizationId.eq(organization_id));

    if let Some(f) = &params.filter {
        select = select.filter(filter_column(f.field).eq(f.value.clone()));
    }

    select = select.order_by(sort_column(params.sort), direction(params.order));
    if params.sort != SortField::Id {
        select = select.order_by(service::Column::Id, Order::Asc);
    }
    paged(select, params.pagination)
}

/// Non-deleted versions of one service in creation order.
pub fn service_versions_page(service_id: &str, pagination: Pagination) -> Select<version::Entity> {
    let select = version::Entity::find()
        .filter(version::Column::DeletedAt.is_null())
        .filter(version::Column::ServiceId.eq(service_id))
        .order_by(version::Column::Id, Order::Asc);
    paged(select, pagination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Filter;
    use sea_orm::{DbBackend, QueryTrait};

    fn sql(select: Select<service::Entity>) -> String {
        select.build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn default_listing_scopes_and_orders_by_id() {
        let s = sql(services_page(7, &ListParams::default()));
        assert!(s.contains(r#""service"."deleted_at" IS NULL"#), "{s}");
        assert!(s.contains(r#""service"."organization_id" = 7"#), "{s}");
        assert!(s.contains(r#"ORDER BY "service"."id" ASC LIMIT 25 OFFSET 0"#), "{s}");
    }

    #[test]
    fn sort_adds_id_tie_break() {
        let params = ListParams { sort: SortField::VersionCount, order: SortOrder::Desc, ..ListParams::default() };
        let s = sql(services_page(1, &params));
        assert!(s.contains(r#"ORDER BY "service"."version_count" DESC, "service"."id" ASC"#), "{s}");
    }

    #[test]
    fn filter_is_bound_as_value() {
        let params = ListParams {
            filter: Some(Filter { field: FilterField::Name, value: "x' OR '1'='1".into() }),
            ..ListParams::default()
        };
        let select = services_page(1, &params);
        let stmt = select.build(DbBackend::Postgres);
        assert!(stmt.sql.contains(r#""service"."name" = $"#), "{}", stmt.sql);
        assert!(!stmt.sql.contains("OR '1'='1"));
    }

    #[test]
    fn pagination_becomes_limit_offset() {
        let params = ListParams { pagination: Pagination::new(3, 10).unwrap(), ..ListParams::default() };
        let s = sql(services_page(1, &params));
        assert!(s.ends_with("LIMIT 10 OFFSET 20"), "{s}");
    }

    #[test]
    fn versions_are_scoped_to_service() {
        let s = service_versions_page("01HZZZZZZZZZZZZZZZZZZZZZZZ", Pagination::default())
            .build(DbBackend::Postgres)
            .to_string();
        assert!(s.contains(r#""version"."service_id" = '01HZZZZZZZZZZZZZZZZZZZZZZZ'"#), "{s}");
        assert!(s.contains(r#""version"."deleted_at" IS NULL"#), "{s}");
        assert!(s.contains(r#"ORDER BY "version"."id" ASC LIMIT 25 OFFSET 0"#), "{s}");
    }
}

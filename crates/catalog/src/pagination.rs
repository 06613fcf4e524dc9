//! Pagination parameters for list endpoints.

use crate::errors::ServiceError;

pub const DEFAULT_PAGE_SIZE: u64 = 25;
pub const MAX_PAGE_SIZE: u64 = 100;

/// SQL binds OFFSET as a signed 64-bit value.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Validated pagination: `page >= 1`, `1 <= per_page <= 100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    page: u64,
    /// items per page
    per_page: u64,
}

impl Pagination {
    pub fn new(page: i64, per_page: i64) -> Result<Self, ServiceError> {
        if page < 1 {
            return Err(ServiceError::validation("invalid page number: page_number must be >= 1"));
        }
        if per_page < 1 || per_page > MAX_PAGE_SIZE as i64 {
            return Err(ServiceError::validation(format!(
                "invalid page size: page_size_limit must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(Self { page: page as u64, per_page: per_page as u64 })
    }

    pub fn page(&self) -> u64 { self.page }

    pub fn per_page(&self) -> u64 { self.per_page }

    /// Rows to skip before this page, capped at what the database can bind.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .checked_mul(self.per_page)
            .map_or(MAX_OFFSET, |o| o.min(MAX_OFFSET))
    }

    /// Pagination block for a page that returned `returned` rows.
    pub fn meta(&self, returned: usize) -> common::types::PageMeta {
        common::types::PageMeta {
            page_number: self.page,
            page_size: returned as u64,
            page_size_limit: self.per_page,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: DEFAULT_PAGE_SIZE } }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn rejects_page_below_one() {
        let err = Pagination::new(0, 10).unwrap_err();
        assert!(err.to_string().contains("invalid page number"));
        assert!(Pagination::new(-3, 10).is_err());
    }

    #[test]
    fn rejects_size_out_of_range() {
        assert!(Pagination::new(1, 0).unwrap_err().to_string().contains("invalid page size"));
        assert!(Pagination::new(1, 101).is_err());
        assert!(Pagination::new(1, 100).is_ok());
        assert!(Pagination::new(1, 1).is_ok());
    }

    #[test]
    fn offset_skips_previous_pages() {
        let p = Pagination::new(5, 20).unwrap();
        assert_eq!(p.offset(), 80);
        assert_eq!(Pagination::default().offset(), 0);
    }

    #[test]
    fn offset_is_capped_for_huge_pages() {
        let p = Pagination::new(i64::MAX, 100).unwrap();
        assert_eq!(p.offset(), i64::MAX as u64);
        let p = Pagination::new(92_233_720_368_547_758, 100).unwrap();
        assert_eq!(p.offset(), i64::MAX as u64);
        let p = Pagination::new(i64::MAX, 1).unwrap();
        assert_eq!(p.offset(), i64::MAX as u64 - 1);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page(), 1);
        assert_eq!(d.per_page(), 25);
    }

    #[test]
    fn meta_reports_returned_count() {
        let m = Pagination::new(2, 10).unwrap().meta(4);
        assert_eq!((m.page_number, m.page_size, m.page_size_limit), (2, 4, 10));
    }
}

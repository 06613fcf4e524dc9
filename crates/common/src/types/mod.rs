//! Response envelope shared by every HTTP handler.
//!
//! Each body carries exactly `data`, `meta` and `error`; unused fields serialize as `null`.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Pong {
    pub message: &'static str,
}

/// Pagination block reported alongside list results.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub page_number: u64,
    /// number of rows actually returned
    pub page_size: u64,
    /// requested cap
    pub page_size_limit: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Serialize, Debug)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub meta: Option<PageMeta>,
    pub error: Option<ErrorBody>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self { data: Some(data), meta: None, error: None }
    }

    pub fn paged(data: T, meta: PageMeta) -> Self {
        Self { data: Some(data), meta: Some(meta), error: None }
    }
}

impl Envelope<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self { data: None, meta: None, error: Some(ErrorBody { message: message.into() }) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_has_null_meta_and_error() {
        let v = serde_json::to_value(Envelope::success(json!({"message": "pong"}))).unwrap();
        assert_eq!(v, json!({"data": {"message": "pong"}, "meta": null, "error": null}));
    }

    #[test]
    fn failure_has_null_data() {
        let v = serde_json::to_value(Envelope::failure("invalid page number")).unwrap();
        assert_eq!(v["data"], serde_json::Value::Null);
        assert_eq!(v["meta"], serde_json::Value::Null);
        assert_eq!(v["error"]["message"], "invalid page number");
    }

    #[test]
    fn paged_reports_meta() {
        let meta = PageMeta { page_number: 2, page_size: 3, page_size_limit: 25 };
        let v = serde_json::to_value(Envelope::paged(vec![1, 2, 3], meta)).unwrap();
        assert_eq!(v["meta"], json!({"page_number": 2, "page_size": 3, "page_size_limit": 25}));
    }
}

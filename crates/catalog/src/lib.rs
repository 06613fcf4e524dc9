//! Service catalog business layer on top of `models`.
//! - `params` validates raw query parameters against fixed allow-lists.
//! - `query` turns validated parameters into bounded, ordered selects.
//! - `store` persists services and versions; `catalog_service` ties them together.

pub mod errors;
pub mod domain;
pub mod pagination;
pub mod params;
pub mod query;
pub mod store;
pub mod catalog_service;
#[cfg(test)]
pub mod test_support;

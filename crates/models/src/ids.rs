//! Record identifiers.
//!
//! Services and versions are keyed by ULIDs: 26 Crockford base32 chars, a 48-bit
//! millisecond timestamp followed by 80 random bits. A process-wide monotonic generator
//! keeps ids minted within the same millisecond in creation order.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use ulid::{Generator, Ulid};

use crate::errors::ModelError;

pub const ID_LEN: usize = 26;

static GENERATOR: Lazy<Mutex<Generator>> = Lazy::new(|| Mutex::new(Generator::new()));

/// Mint a fresh identifier. Called by the store right before a row is persisted.
pub fn new_id() -> String {
    let next = match GENERATOR.lock() {
        Ok(mut g) => g.generate().ok(),
        Err(_) => None,
    };
    // random part overflowed within one millisecond, or the lock was poisoned
    next.unwrap_or_else(Ulid::new).to_string()
}

/// Parse an externally supplied identifier, returning its canonical (uppercase) form.
pub fn parse_id(raw: &str) -> Result<String, ModelError> {
    Ulid::from_string(raw)
        .map(|u| u.to_string())
        .map_err(|_| ModelError::Validation(format!("invalid id: {raw}")))
}

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Record;

/// Build a record from key/value pairs.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(fields: &[(&str, &str)]) -> Record {
    fields
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Build a batch of single-field records under a shared key.
pub fn make_records(key: &str, values: &[&str]) -> Vec<Record> {
    values
        .iter()
        .map(|value| make_record(&[(key, value)]))
        .collect()
}

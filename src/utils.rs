//! Utility functions for string processing.

/// Fold a string to lowercase for comparison.
///
/// ASCII-only, byte-wise case mapping: 'A'-'Z' map to 'a'-'z' and every other
/// byte passes through untouched. This is deliberately not full Unicode case
/// folding - the scorer compares raw bytes and the fold must never change the
/// byte length of the input.
pub fn fold_case(value: &str) -> String {
    value.to_ascii_lowercase()
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked filtering: score, threshold, sort.
//!
//! Two public entry points share one pipeline. [`search_in_strings`] scores a
//! flat candidate list; [`search_in_maps`] projects a field out of each record,
//! runs the same pipeline over the projection, then re-expands the surviving
//! values back into whole records.
//!
//! Ordering is descending by score. Relative order within an equal-score group
//! is not guaranteed - the sort is unstable, and callers must not rely on it.
//!
//! # Re-expansion and duplicate field values
//!
//! Re-expansion resolves each surviving value through an index mapping a field
//! value to the *first* input position holding it, built once per call.
//! Records sharing a field value are therefore indistinguishable on the way
//! back out: every duplicate resolves to the earliest record. This mirrors the
//! projection being value-based, not identity-based.

use std::collections::HashMap;

use crate::scoring::similarity;
use crate::types::{Record, Tolerance, ValidationError};

/// A candidate paired with its score, alive only between scoring and sorting.
struct ScoredCandidate {
    value: String,
    accuracy: f32,
}

/// Return the elements ordered from most to least similar to `term`, dropping
/// everything scoring below `tolerance`.
///
/// The output never contains an element whose score is strictly below the
/// tolerance - the threshold is exact even though the score is heuristic.
/// Empty input, or no candidate meeting the tolerance, yields an empty vector,
/// not an error.
///
/// # Errors
///
/// [`ValidationError::ToleranceOutOfRange`] when `tolerance` is outside
/// `[0, 1]`, before any scoring work happens.
pub fn search_in_strings<S: AsRef<str>>(
    elements: &[S],
    term: &str,
    tolerance: f32,
) -> Result<Vec<String>, ValidationError> {
    let tolerance = Tolerance::new(tolerance)?;
    Ok(ranked_filter(elements, term, tolerance))
}

/// Return the records ordered by how similar their `key` field is to `term`,
/// dropping records whose field scores below `tolerance`.
///
/// A record without the `key` field is scored as an empty string, not skipped.
/// Records with duplicate field values all resolve to the first record holding
/// that value (see the module docs).
///
/// # Errors
///
/// [`ValidationError::ToleranceOutOfRange`] when `tolerance` is outside
/// `[0, 1]`, before any projection or scoring work happens.
pub fn search_in_maps(
    elements: &[Record],
    term: &str,
    key: &str,
    tolerance: f32,
) -> Result<Vec<Record>, ValidationError> {
    let tolerance = Tolerance::new(tolerance)?;

    let key_values: Vec<String> = elements
        .iter()
        .map(|record| record.get(key).cloned().unwrap_or_default())
        .collect();

    let sorted_values = ranked_filter(&key_values, term, tolerance);

    // Field value -> first input position holding it
    let mut first_position: HashMap<&str, usize> = HashMap::new();
    for (position, value) in key_values.iter().enumerate() {
        first_position.entry(value.as_str()).or_insert(position);
    }

    let result = sorted_values
        .into_iter()
        .map(|value| match first_position.get(value.as_str()) {
            Some(&position) => elements[position].clone(),
            // Unreachable when the filter echoes projected values back, but a
            // hole stays visible to the caller rather than being skipped
            None => Record::new(),
        })
        .collect();

    Ok(result)
}

/// Score, threshold, sort descending, strip the scores.
fn ranked_filter<S: AsRef<str>>(elements: &[S], term: &str, tolerance: Tolerance) -> Vec<String> {
    let mut retained: Vec<ScoredCandidate> = Vec::new();

    for element in elements {
        let accuracy = similarity(term, element.as_ref());
        if accuracy >= tolerance.get() {
            retained.push(ScoredCandidate {
                value: element.as_ref().to_string(),
                accuracy,
            });
        }
    }

    retained.sort_unstable_by(|a, b| b.accuracy.total_cmp(&a.accuracy));

    retained.into_iter().map(|scored| scored.value).collect()
}

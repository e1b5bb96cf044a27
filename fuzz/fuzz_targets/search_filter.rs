// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked filter under adversarial input.
//!
//! The validation verdict must match the range check exactly, and every
//! successful result must be thresholded, ordered, and no longer than the
//! input. None of it should crash.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use simile::{search_in_strings, similarity};

/// Fuzz input for the string-form search
#[derive(Debug, Arbitrary)]
struct FilterInput {
    elements: Vec<String>,
    term: String,
    tolerance: f32,
}

fuzz_target!(|input: FilterInput| {
    if input.term.len() > 64 || input.elements.len() > 64 {
        return;
    }
    if input.elements.iter().any(|e| e.len() > 64) {
        return;
    }

    let result = search_in_strings(&input.elements, &input.term, input.tolerance);

    let in_range = (0.0..=1.0).contains(&input.tolerance);
    assert_eq!(result.is_ok(), in_range, "verdict must match the range check");

    if let Ok(ranked) = result {
        assert!(ranked.len() <= input.elements.len());

        let scores: Vec<f32> = ranked
            .iter()
            .map(|value| similarity(&input.term, value))
            .collect();
        for window in scores.windows(2) {
            assert!(window[0] >= window[1], "scores must be non-increasing");
        }
        for score in scores {
            assert!(score >= input.tolerance, "survivors must meet the tolerance");
        }
    }
});

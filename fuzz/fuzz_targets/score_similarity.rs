// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scorer under adversarial input.
//!
//! The scorer is pure and total: whatever bytes arrive, it must return a
//! finite, non-negative number and never panic. Identity must hold exactly.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use simile::similarity;

/// Fuzz input for the similarity scorer
#[derive(Debug, Arbitrary)]
struct ScoreInput {
    term: String,
    candidate: String,
}

fuzz_target!(|input: ScoreInput| {
    // Cap lengths to keep the O(limit^2) cross scan from timing out
    if input.term.len() > 256 || input.candidate.len() > 256 {
        return;
    }

    let score = similarity(&input.term, &input.candidate);
    assert!(score.is_finite(), "score must be finite");
    assert!(score >= 0.0, "score must be non-negative");

    // Identity: any string scores 1 against itself
    assert_eq!(similarity(&input.term, &input.term), 1.0);

    // Determinism: same inputs, same score
    assert_eq!(score, similarity(&input.term, &input.candidate));
});

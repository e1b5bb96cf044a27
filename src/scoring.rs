// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind similarity ranking.
//!
//! This is a cheap positional-overlap heuristic, not edit distance. A byte
//! matching at the same index is worth a full hit; a byte shared anywhere
//! inside the overlap window is worth a quarter hit. Getting the constants
//! right matters less than keeping them stable - downstream tolerances are
//! calibrated against exactly these numbers.
//!
//! # Key Invariant: Asymmetry
//!
//! The denominator is always the term length, never the candidate length, so
//! `similarity(a, b)` and `similarity(b, a)` can differ whenever the two
//! strings have different lengths. A term that is a byte prefix of the
//! candidate collects an exact hit at every term position and scores 1.

use crate::utils::fold_case;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================
// DO NOT CHANGE without recalibrating every tolerance in the test suite.
// The regression values in tests/search/ranking.rs are derived from these.

/// Credit for a byte shared anywhere inside the overlap window.
///
/// Accumulated once per index pair satisfying the cross comparison, in both
/// directions, so a single shared byte can stack more than once.
pub const FUZZY_HIT_WEIGHT: f32 = 0.25;

/// Final divisor applied to the normalized hit total.
pub const SCORE_DIVISOR: f32 = 4.0;

/// How similar is `candidate` to `term`? Returns a score where 1 means an
/// exact (case-insensitive) match.
///
/// The comparison operates on raw bytes after ASCII case folding; multi-byte
/// characters are compared byte by byte, never as code points.
///
/// # Algorithm
///
/// 1. Byte equality, before and after folding, short-circuits to 1.
/// 2. Every position inside `min(len)` either scores an exact hit (same byte,
///    same index) or runs a cross scan over the window, collecting
///    [`FUZZY_HIT_WEIGHT`] per pair of positions sharing a byte in either
///    direction.
/// 3. A term whose every byte landed an exact hit scores 1.
/// 4. Otherwise `(exact + fuzzy) / term_len / `[`SCORE_DIVISOR`].
///
/// Pure and total: no error conditions, no side effects, never panics. An
/// empty term scores 1 against any candidate (step 3 with zero length).
pub fn similarity(term: &str, candidate: &str) -> f32 {
    if term == candidate {
        return 1.0;
    }

    let term = fold_case(term);
    let candidate = fold_case(candidate);

    if term == candidate {
        return 1.0;
    }

    let term_bytes = term.as_bytes();
    let candidate_bytes = candidate.as_bytes();
    let limit = term_bytes.len().min(candidate_bytes.len());

    let mut exact_hits = 0usize;
    let mut fuzzy_hits = 0.0f32;

    for i in 0..limit {
        if term_bytes[i] == candidate_bytes[i] {
            exact_hits += 1;
        } else {
            for e in 0..limit {
                if term_bytes[i] == candidate_bytes[e] || term_bytes[e] == candidate_bytes[i] {
                    fuzzy_hits += FUZZY_HIT_WEIGHT;
                }
            }
        }
    }

    if exact_hits == term_bytes.len() {
        return 1.0;
    }

    (exact_hits as f32 + fuzzy_hits) / term_bytes.len() as f32 / SCORE_DIVISOR
}

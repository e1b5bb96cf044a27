//! Approximate string matching with tolerance-ranked results.
//!
//! This crate scores candidate strings against a reference term with a cheap
//! positional-overlap heuristic, filters out candidates below a tolerance, and
//! returns the survivors ordered from most to least similar. Records (string
//! maps) can be searched through one of their fields.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │   types.rs  │────▶│  scoring.rs  │────▶│   search.rs   │
//! │ (Tolerance, │     │ (similarity) │     │  (search_in_  │
//! │   Record)   │     │              │     │ strings/maps) │
//! └─────────────┘     └──────────────┘     └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use simile::search_in_strings;
//!
//! let fruits = ["apple", "aple", "banana"];
//! let ranked = search_in_strings(&fruits, "apple", 0.1).unwrap();
//! assert_eq!(ranked, vec!["apple".to_string(), "aple".to_string()]);
//! ```
//!
//! The scorer is asymmetric by design: the term length is the normalizing
//! denominator, so swapping term and candidate can change the score. See
//! [`similarity`] for the exact semantics.

// Module declarations
mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use scoring::{similarity, FUZZY_HIT_WEIGHT, SCORE_DIVISOR};
pub use search::{search_in_maps, search_in_strings};
pub use types::{Record, Tolerance, ValidationError};
pub use utils::fold_case;

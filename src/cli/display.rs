// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the simile CLI.
//!
//! Colored score bands when stdout is a real terminal: strong matches green,
//! middling ones yellow, the rest dimmed. Respects `NO_COLOR` for the purists
//! and non-TTY detection for pipelines.

/// Scores at or above this render in the strong-match color.
const STRONG_BAND: f32 = 0.75;

/// Scores at or above this (and below [`STRONG_BAND`]) render in the
/// middling-match color.
const MID_BAND: f32 = 0.25;

/// Should output be colored?
///
/// Color only when stdout is a TTY and `NO_COLOR` is unset.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Format a score for the `--scores` column, tinted by band.
pub fn format_score(score: f32, color: bool) -> String {
    let text = format!("{:.4}", score);
    if !color {
        return text;
    }

    let code = if score >= STRONG_BAND {
        "32" // green
    } else if score >= MID_BAND {
        "33" // yellow
    } else {
        "2" // dim
    };
    format!("\x1b[{}m{}\x1b[0m", code, text)
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the simile command-line interface.
//!
//! Two subcommands mirroring the two library entry points: `strings` ranks a
//! newline-delimited candidate list, `records` ranks a JSON array of flat
//! string objects through one of their fields. Both read from a file argument
//! or stdin when the argument is omitted.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "simile",
    about = "Rank candidates by similarity to a term",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank newline-delimited candidate strings
    Strings {
        /// Input file of candidates, one per line (stdin when omitted)
        file: Option<String>,

        /// Reference term to rank against
        #[arg(short, long)]
        term: String,

        /// Minimum similarity score to keep, in 0-1
        #[arg(long, default_value = "0")]
        tolerance: f32,

        /// Show the similarity score next to each result
        #[arg(long)]
        scores: bool,
    },

    /// Rank records from a JSON array of string-to-string objects
    Records {
        /// Input file containing the JSON array (stdin when omitted)
        file: Option<String>,

        /// Reference term to rank against
        #[arg(short, long)]
        term: String,

        /// Field to project out of each record for scoring
        #[arg(short, long)]
        key: String,

        /// Minimum similarity score to keep, in 0-1
        #[arg(long, default_value = "0")]
        tolerance: f32,

        /// Show the similarity score next to each result
        #[arg(long)]
        scores: bool,
    },
}

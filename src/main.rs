use std::fs;
use std::io::Read;

use clap::Parser;
use serde::Serialize;

use simile::{search_in_maps, search_in_strings, similarity, Record};

mod cli;
use cli::display::{format_score, use_color};
use cli::{Cli, Commands};

/// Output shape for `records --scores`: the matched record wrapped with the
/// similarity of its projected field.
#[derive(Serialize)]
struct ScoredRecord {
    score: f32,
    record: Record,
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Strings {
            file,
            term,
            tolerance,
            scores,
        } => run_strings(file.as_deref(), &term, tolerance, scores),
        Commands::Records {
            file,
            term,
            key,
            tolerance,
            scores,
        } => run_records(file.as_deref(), &term, &key, tolerance, scores),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_strings(
    file: Option<&str>,
    term: &str,
    tolerance: f32,
    scores: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_input(file)?;
    let candidates: Vec<&str> = raw.lines().filter(|line| !line.is_empty()).collect();

    let ranked = search_in_strings(&candidates, term, tolerance)?;

    let color = use_color();
    for value in ranked {
        if scores {
            let score = similarity(term, &value);
            println!("{}  {}", format_score(score, color), value);
        } else {
            println!("{}", value);
        }
    }

    Ok(())
}

fn run_records(
    file: Option<&str>,
    term: &str,
    key: &str,
    tolerance: f32,
    scores: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_input(file)?;
    let records: Vec<Record> = serde_json::from_str(&raw)?;

    let ranked = search_in_maps(&records, term, key, tolerance)?;

    for record in ranked {
        let line = if scores {
            let field = record.get(key).map(String::as_str).unwrap_or_default();
            let score = similarity(term, field);
            serde_json::to_string(&ScoredRecord { score, record })?
        } else {
            serde_json::to_string(&record)?
        };
        println!("{}", line);
    }

    Ok(())
}

/// Read the whole input: a file when a path was given, stdin otherwise.
fn read_input(file: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

//! Command-line interface for the `scq` query converter.
//!
//! Reads a Scopus-style boolean query from a file, parses it, prints
//! the JSON parse tree, and writes the tree next to the input with a
//! `.json` extension.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use scq_parse::{ParseMode, QueryNode, parse_with_mode};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Query file used when no input path is given.
const DEFAULT_QUERY_PATH: &str = "queries/sdg16.txt";

#[derive(Parser)]
#[command(name = "scq")]
#[command(about = "Convert Scopus-style boolean queries to JSON parse trees")]
/// Top-level CLI options.
struct Cli {
    /// Query file to convert
    #[arg(default_value = DEFAULT_QUERY_PATH)]
    input: PathBuf,

    /// Fail on query segments that match no clause pattern
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cmd_convert(&cli.input, cli.strict)
}

/// Implements the conversion: read, parse, print, and write the
/// derived `.json` file. Any failure is reported to stderr and
/// produces no output file.
fn cmd_convert(input: &Path, strict: bool) -> ExitCode {
    let query = match fs::read_to_string(input) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("error: could not read {}: {e}", input.display());
            return ExitCode::FAILURE;
        }
    };

    let mode = if strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let tree = match parse_with_mode(&query, mode) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let json = match render_json(&tree) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("error: could not serialize parse tree: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{json}");

    let output = input.with_extension("json");
    if let Err(e) = fs::write(&output, &json) {
        eprintln!("error: could not write {}: {e}", output.display());
        return ExitCode::FAILURE;
    }

    println!();
    println!("saved to {}", output.display());

    ExitCode::SUCCESS
}

/// Renders the parse tree as JSON indented with four spaces.
fn render_json(tree: &QueryNode) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tree.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

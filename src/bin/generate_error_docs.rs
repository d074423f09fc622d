//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `SearchError` via its `code()`, `description()`, `details()`,
//! and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use ceres_search::errors::{InvalidTermReason, SearchError};
use std::io;
use std::path::PathBuf;

/// One sample of every `SearchError` variant, in code order
fn all_search_error_variants() -> Vec<SearchError> {
    vec![
        SearchError::InvalidSearchTerm {
            term: "ABBA".to_string(),
            reason: InvalidTermReason::DuplicateLetter('B'),
        },
        SearchError::InvalidCrossingLength { term: "XMAS".to_string(), len: 4 },
        SearchError::MissingInput {
            path: PathBuf::from("put_puzzle_input_here.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        },
        SearchError::Io {
            path: PathBuf::from("grid.txt"),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Search Errors\n");
    println!("Errors from validating search words and from reading the grid file.\n");

    for error in all_search_error_variants() {
        println!("### {}: {}\n", error.code(), error.description());
        println!("**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            println!("**How to fix:**");
            println!("```");
            println!("{help_text}");
            println!("```\n");
        }

        println!("**Example error message:**");
        println!("```");
        println!("{error}");
        println!("```\n");

        println!("**Detailed format:**");
        println!("```");
        println!("{}", error.display_detailed());
        println!("```\n");

        println!("---\n");
    }

    println!("## Error Display Formats\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_cover_every_code_in_order() {
        let codes: Vec<&str> = all_search_error_variants().iter().map(SearchError::code).collect();
        assert_eq!(codes, vec!["E001", "E002", "E003", "E004"]);
    }
}

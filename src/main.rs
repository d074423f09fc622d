use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use ceres_search::errors::SearchError;
use ceres_search::report::{self, RunConfig};

/// Count straight-line words and X-shaped crossings in a letter grid
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// Path to the grid file (one row per line)
    #[arg(short, long, default_value = report::DEFAULT_INPUT)]
    input: PathBuf,

    /// Word to find in straight lines, in all eight directions
    #[arg(short, long, default_value = report::DEFAULT_WORD)]
    word: String,

    /// Odd-length word to find as diagonal X-crossings
    #[arg(short, long = "crossing-word", default_value = report::DEFAULT_CROSSING_WORD)]
    crossing_word: String,

    /// Also print every match before the counts
    #[arg(short, long)]
    list: bool,
}

/// Entry point of the grid search CLI.
///
/// Delegates to [`try_main`], printing any error in its detailed form before
/// exiting with code 1.
fn main() -> ExitCode {
    ceres_search::log::init_logger(ceres_search::log::debug_requested());

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.display_detailed());
            ExitCode::FAILURE
        }
    }
}

/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the grid and run both searches.
/// 3. Print matches (with `--list`) and then the two counts on stdout.
/// 4. Log timing on stderr.
fn try_main() -> Result<(), SearchError> {
    let cli = Cli::parse();
    let config = RunConfig {
        input: cli.input,
        word: cli.word,
        crossing_word: cli.crossing_word,
    };

    let t_search = Instant::now();
    let search_report = report::run(&config)?;
    let search_secs = t_search.elapsed().as_secs_f64();

    if cli.list {
        for location in &search_report.locations {
            println!("{location}");
        }
        for crossing in &search_report.crossings {
            println!("{crossing}");
        }
    }
    println!("{}", search_report.location_count());
    println!("{}", search_report.crossing_count());

    log::info!(
        "Found {} locations of {} and {} crossings of {} in {:.3}s",
        search_report.location_count(),
        config.word,
        search_report.crossing_count(),
        config.crossing_word,
        search_secs
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["ceres_search"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("put_puzzle_input_here.txt"));
        assert_eq!(cli.word, "XMAS");
        assert_eq!(cli.crossing_word, "MAS");
        assert!(!cli.list);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from(["ceres_search", "-i", "grid.txt", "-w", "COD", "--crossing-word", "COD", "-l"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("grid.txt"));
        assert_eq!(cli.word, "COD");
        assert_eq!(cli.crossing_word, "COD");
        assert!(cli.list);
    }
}

//! Running both searches over one grid and collecting what they found.
//!
//! This is the layer the CLI and the WASM bindings share: it takes the words to
//! look for, runs the straight-line and crossing searches, and hands back the
//! results as plain values ready to print or serialize.

use crate::crossing::{find_crossings, Crossing};
use crate::errors::SearchError;
use crate::grid::Grid;
use crate::scanner::{find_locations, Location};
use std::path::PathBuf;

/// Default word for the straight-line search.
pub const DEFAULT_WORD: &str = "XMAS";
/// Default word for the crossing search.
pub const DEFAULT_CROSSING_WORD: &str = "MAS";
/// Input file looked for in the current directory when none is given.
pub const DEFAULT_INPUT: &str = "put_puzzle_input_here.txt";

/// Everything a run needs. Nothing is read from global state.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub word: String,
    pub crossing_word: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            word: DEFAULT_WORD.to_string(),
            crossing_word: DEFAULT_CROSSING_WORD.to_string(),
        }
    }
}

/// Results of both searches over one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub locations: Vec<Location>,
    pub crossings: Vec<Crossing>,
}

impl SearchReport {
    /// Run both searches. Both words are validated before either scan starts.
    ///
    /// # Errors
    ///
    /// Whatever validating `word` or `crossing_word` reports.
    pub fn build(grid: &Grid, word: &str, crossing_word: &str) -> Result<SearchReport, SearchError> {
        let locations = find_locations(word, grid)?;
        let crossings = find_crossings(crossing_word, grid)?;

        let report = SearchReport { locations: locations.collect(), crossings: crossings.collect() };
        log::debug!(
            "found {} locations of {word:?} and {} crossings of {crossing_word:?}",
            report.locations.len(),
            report.crossings.len()
        );
        Ok(report)
    }

    #[must_use]
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn crossing_count(&self) -> usize {
        self.crossings.len()
    }
}

/// Load the grid named by `config` and run both searches on it.
///
/// # Errors
///
/// `SearchError::MissingInput` / `SearchError::Io` from reading the input,
/// or a validation error for either word.
#[cfg(not(target_arch = "wasm32"))]
pub fn run(config: &RunConfig) -> Result<SearchReport, SearchError> {
    // validate before touching the filesystem
    crate::search_term::SearchTerm::new(&config.word)?;
    crate::search_term::SearchTerm::for_crossing(&config.crossing_word)?;

    let grid = Grid::load_from_path(&config.input)?;
    log::info!(
        "loaded {} rows from '{}'",
        grid.num_rows(),
        config.input.display()
    );
    SearchReport::build(&grid, &config.word, &config.crossing_word)
}

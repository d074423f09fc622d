//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of both searches on *your* machine.
//! - Loads (or generates) the grid once, then runs each search several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Against a real input:           `cargo run --bin bench_local --release -- -i put_puzzle_input_here.txt`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Without `--input`, a square grid of `--size` rows is generated from a fixed seed,
//!   so runs are comparable across machines.
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use ceres_search::crossing::find_crossings;
use ceres_search::errors::SearchError;
use ceres_search::grid::Grid;
use ceres_search::report::{DEFAULT_CROSSING_WORD, DEFAULT_WORD};
use ceres_search::scanner::find_locations;

/// Simple local benchmark runner: build the grid once, time both searches.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Grid file to search; a synthetic grid is generated when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Side length of the synthetic grid
    #[arg(short, long, default_value_t = 1000)]
    size: usize,

    /// Number of repeats per search (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,
}

/// Deterministic pseudo-random grid over the letters of the default words.
fn synthetic_grid(size: usize) -> Grid {
    const LETTERS: [char; 4] = ['X', 'M', 'A', 'S'];
    // xorshift64
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next_letter = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        LETTERS[(state % 4) as usize]
    };
    let rows: Vec<String> = (0..size).map(|_| (0..size).map(|_| next_letter()).collect()).collect();
    Grid::from_rows(rows)
}

fn median(mut times: Vec<Duration>) -> Duration {
    times.sort();
    times[times.len() / 2]
}

fn time_repeats<F>(num_repeats: usize, mut f: F) -> Result<(Duration, usize), SearchError>
where
    F: FnMut() -> Result<usize, SearchError>,
{
    // warm-up (not timed)
    let count = f()?;
    let mut times = Vec::with_capacity(num_repeats);
    for _ in 0..num_repeats.max(1) {
        let t = Instant::now();
        black_box(f()?);
        times.push(t.elapsed());
    }
    Ok((median(times), count))
}

fn try_main() -> Result<(), SearchError> {
    let cli = Cli::parse();

    let grid = match &cli.input {
        Some(path) => Grid::load_from_path(path)?,
        None => synthetic_grid(cli.size),
    };
    eprintln!("Grid: {} rows", grid.num_rows());

    let (locations_time, locations) =
        time_repeats(cli.num_repeats, || Ok(find_locations(DEFAULT_WORD, &grid)?.count()))?;
    eprintln!(
        "{DEFAULT_WORD:<6} locations: {locations:>8}  median {:.3}s",
        locations_time.as_secs_f64()
    );

    let (crossings_time, crossings) =
        time_repeats(cli.num_repeats, || Ok(find_crossings(DEFAULT_CROSSING_WORD, &grid)?.count()))?;
    eprintln!(
        "{DEFAULT_CROSSING_WORD:<6} crossings: {crossings:>8}  median {:.3}s",
        crossings_time.as_secs_f64()
    );

    Ok(())
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.display_detailed());
            ExitCode::FAILURE
        }
    }
}

//! Detection of X-shaped crossings: two diagonal readings of the same word
//! that share their middle letter.
//!
//! ```text
//! M.S
//! .A.
//! M.S
//! ```
//!
//! Here `MAS` reads south-east from the top-left and north-east from the
//! bottom-left, both through the `A`, so the `A` is a crossing.

use crate::direction::Direction;
use crate::errors::SearchError;
use crate::grid::{Cells, Grid};
use crate::matcher::matches_letters;
use crate::search_term::SearchTerm;
use std::fmt;
use std::iter::FusedIterator;

/// The middle cell of an X-shaped crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crossing {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Is `(row, col)` the shared middle letter of two diagonal readings of `word`?
///
/// # Errors
///
/// `SearchError::InvalidSearchTerm` if `word` repeats a letter or is a
/// palindrome, `SearchError::InvalidCrossingLength` if it has an even number
/// of letters.
pub fn is_crossing(word: &str, grid: &Grid, row: usize, col: usize) -> Result<bool, SearchError> {
    let term = SearchTerm::for_crossing(word)?;
    Ok(crossing_at(&term, grid, row, col))
}

/// Crossing test for a term that has already been validated with
/// [`SearchTerm::for_crossing`].
pub(crate) fn crossing_at(term: &SearchTerm, grid: &Grid, row: usize, col: usize) -> bool {
    // an even-length word has no middle letter to cross on
    if term.len() % 2 == 0 {
        return false;
    }
    let offset = term.half_len();
    let Some(middle) = term.middle() else {
        return false;
    };
    if grid.get(row, col) != Some(middle) {
        return false;
    }

    // every diagonal arm needs `offset` cells on each side of the middle
    if row < offset
        || col < offset
        || row + offset >= grid.num_rows()
        || col + offset >= grid.row_len(row)
    {
        return false;
    }

    // The word is not a palindrome, so the two arms on one axis can never both
    // match; two hits always means two different diagonals.
    let mut hits = 0;
    for direction in Direction::DIAGONALS {
        // each arm starts `offset` cells behind the middle and walks through it
        let back = direction.opposite();
        let Some((start_row, start_col)) =
            (0..offset).try_fold((row, col), |(r, c), _| back.step(r, c))
        else {
            continue;
        };
        if matches_letters(term.letters(), grid, start_row, start_col, direction) {
            hits += 1;
            if hits == 2 {
                return true;
            }
        }
    }
    false
}

/// Find every crossing of `word` in `grid`.
///
/// The word is validated before anything is scanned. The returned iterator is
/// lazy and can be cloned to restart the scan.
///
/// # Errors
///
/// As for [`is_crossing`].
pub fn find_crossings<'a>(word: &str, grid: &'a Grid) -> Result<Crossings<'a>, SearchError> {
    let term = SearchTerm::for_crossing(word)?;
    Ok(Crossings::new(term, grid))
}

/// Lazy iterator over the [`Crossing`]s of a word, see [`find_crossings`].
#[derive(Debug, Clone)]
pub struct Crossings<'a> {
    grid: &'a Grid,
    term: SearchTerm,
    cells: Cells<'a>,
}

impl<'a> Crossings<'a> {
    /// `term` must come from [`SearchTerm::for_crossing`].
    pub(crate) fn new(term: SearchTerm, grid: &'a Grid) -> Crossings<'a> {
        log::debug!("scanning {} rows for crossings of {:?}", grid.num_rows(), term.as_str());
        Crossings { grid, term, cells: grid.cells() }
    }
}

impl Iterator for Crossings<'_> {
    type Item = Crossing;

    fn next(&mut self) -> Option<Crossing> {
        let (grid, term) = (self.grid, &self.term);
        self.cells
            .by_ref()
            .find(|&(row, col, _)| crossing_at(term, grid, row, col))
            .map(|(row, col, _)| Crossing { row, col })
    }
}

impl FusedIterator for Crossings<'_> {}

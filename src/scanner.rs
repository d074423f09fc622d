//! Straight-line word search over a whole grid.
//!
//! # Examples
//!
//! ```
//! use ceres_search::grid::Grid;
//! use ceres_search::scanner::find_locations;
//!
//! let grid = Grid::from_rows(["XMAS", "MM..", "A.A.", "S..S"]);
//! let found = find_locations("XMAS", &grid)?;
//! assert_eq!(found.count(), 3);
//! # Ok::<(), ceres_search::errors::SearchError>(())
//! ```

use crate::direction::Direction;
use crate::errors::SearchError;
use crate::grid::{Cells, Grid};
use crate::matcher::matches_letters;
use crate::search_term::SearchTerm;
use std::fmt;
use std::iter::FusedIterator;

/// Where a word was found: its first letter and the direction it reads in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{}", self.row, self.col, self.direction)
    }
}

/// Find every place `word` can be read in a straight line.
///
/// The word is validated before anything is scanned. The returned iterator is
/// lazy and can be cloned to restart the scan.
///
/// # Errors
///
/// `SearchError::InvalidSearchTerm` if `word` repeats a letter or is a palindrome.
pub fn find_locations<'a>(word: &str, grid: &'a Grid) -> Result<Locations<'a>, SearchError> {
    let term = SearchTerm::new(word)?;
    Ok(Locations::new(term, grid))
}

/// Lazy iterator over the [`Location`]s of a word, see [`find_locations`].
///
/// Cells are visited in row-major order and directions in [`Direction::ALL`]
/// order. Callers should only rely on the set of locations, not their order.
#[derive(Debug, Clone)]
pub struct Locations<'a> {
    grid: &'a Grid,
    term: SearchTerm,
    cells: Cells<'a>,
    // cell whose directions are still being tried, and the next one to try
    current: Option<(usize, usize)>,
    next_direction: usize,
}

impl<'a> Locations<'a> {
    pub(crate) fn new(term: SearchTerm, grid: &'a Grid) -> Locations<'a> {
        log::debug!(
            "scanning {} rows for {:?} in {} directions",
            grid.num_rows(),
            term.as_str(),
            Direction::ALL.len()
        );
        Locations { grid, term, cells: grid.cells(), current: None, next_direction: 0 }
    }

    fn advance_cell(&mut self) -> Option<(usize, usize)> {
        let first = self.term.first()?;
        let (row, col, _) = self.cells.by_ref().find(|&(_, _, c)| c == first)?;
        self.next_direction = 0;
        Some((row, col))
    }
}

impl Iterator for Locations<'_> {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        loop {
            let (row, col) = match self.current {
                Some(cell) => cell,
                None => {
                    let cell = self.advance_cell()?;
                    self.current = Some(cell);
                    cell
                }
            };

            while let Some(&direction) = Direction::ALL.get(self.next_direction) {
                self.next_direction += 1;
                if matches_letters(self.term.letters(), self.grid, row, col, direction) {
                    return Some(Location { row, col, direction });
                }
            }
            self.current = None;
        }
    }
}

impl FusedIterator for Locations<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InvalidTermReason;
    use crate::matcher::matches;
    use std::collections::HashSet;

    fn cod_grid() -> Grid {
        Grid::from_rows(["COD....", ".COD...", "C.COD.D", ".O...O.", "D.D.C.C"])
    }

    #[test]
    fn test_find_locations_counts_every_direction() {
        let grid = cod_grid();
        let found: Vec<Location> = find_locations("COD", &grid).unwrap().collect();
        assert_eq!(found.len(), 8);
    }

    #[test]
    fn test_find_locations_at_shared_start() {
        let grid = cod_grid();
        let from_center: HashSet<Direction> = find_locations("COD", &grid)
            .unwrap()
            .filter(|loc| (loc.row, loc.col) == (2, 2))
            .map(|loc| loc.direction)
            .collect();
        assert_eq!(
            from_center,
            HashSet::from([Direction::East, Direction::SouthWest, Direction::North])
        );
    }

    #[test]
    fn test_find_locations_agrees_with_matcher() {
        let grid = cod_grid();
        let found: HashSet<Location> = find_locations("COD", &grid).unwrap().collect();
        for (row, col, _) in grid.cells() {
            for direction in Direction::ALL {
                let expected = matches("COD", &grid, row, col, direction);
                assert_eq!(found.contains(&Location { row, col, direction }), expected);
            }
        }
    }

    #[test]
    fn test_find_locations_is_restartable() {
        let grid = cod_grid();
        let locations = find_locations("COD", &grid).unwrap();
        let first: Vec<_> = locations.clone().collect();
        let second: Vec<_> = locations.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_duplicate_letters() {
        let grid = cod_grid();
        let err = find_locations("AA", &grid).unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidSearchTerm { reason: InvalidTermReason::DuplicateLetter('A'), .. }
        ));
    }

    #[test]
    fn test_rejects_palindrome() {
        let grid = cod_grid();
        assert!(matches!(find_locations("ABA", &grid), Err(SearchError::InvalidSearchTerm { .. })));
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::default();
        assert_eq!(find_locations("XMAS", &grid).unwrap().count(), 0);
    }

    #[test]
    fn test_stops_early() {
        let grid = Grid::from_rows(["XMASXMASXMAS"]);
        let mut locations = find_locations("XMAS", &grid).unwrap();
        assert_eq!(locations.next(), Some(Location { row: 0, col: 0, direction: Direction::East }));
        assert_eq!(locations.count(), 2);
    }

    #[test]
    fn test_location_display() {
        let loc = Location { row: 3, col: 1, direction: Direction::NorthWest };
        assert_eq!(loc.to_string(), "3,1,NORTHWEST");
    }
}

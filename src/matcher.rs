use crate::direction::Direction;
use crate::grid::Grid;

/// Does walking from `(row, col)` towards `direction` spell `word` exactly?
///
/// Every step is bounds-checked against the grid (the column against the length
/// of the row the step lands on). Leaving the grid, including starting outside
/// it, is an ordinary mismatch. The empty word never matches.
///
/// ```
/// use ceres_search::direction::Direction;
/// use ceres_search::grid::Grid;
/// use ceres_search::matcher::matches;
///
/// let grid = Grid::from_rows(["XMAS", "M...", "A...", "S..."]);
/// assert!(matches("XMAS", &grid, 0, 0, Direction::East));
/// assert!(matches("XMAS", &grid, 0, 0, Direction::South));
/// assert!(!matches("XMAS", &grid, 0, 0, Direction::SouthEast));
/// ```
#[must_use]
pub fn matches(word: &str, grid: &Grid, row: usize, col: usize, direction: Direction) -> bool {
    spells(word.chars(), grid, row, col, direction)
}

/// Same as [`matches`], for a word that has already been split into letters.
pub(crate) fn matches_letters(letters: &[char], grid: &Grid, row: usize, col: usize, direction: Direction) -> bool {
    spells(letters.iter().copied(), grid, row, col, direction)
}

fn spells<I>(letters: I, grid: &Grid, row: usize, col: usize, direction: Direction) -> bool
where
    I: IntoIterator<Item = char>,
{
    let mut letters = letters.into_iter();
    let Some(first) = letters.next() else {
        return false;
    };
    if grid.get(row, col) != Some(first) {
        return false;
    }

    let mut pos = (row, col);
    for expected in letters {
        // a negative coordinate or a cell past the end of its row both miss
        let Some(next) = direction.step(pos.0, pos.1) else {
            return false;
        };
        if grid.get(next.0, next.1) != Some(expected) {
            return false;
        }
        pos = next;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cod_grid() -> Grid {
        Grid::from_rows(["COD....", ".COD...", "C.COD.D", ".O...O.", "D.D.C.C"])
    }

    #[test]
    fn test_matches_north() {
        assert!(matches("COD", &cod_grid(), 2, 2, Direction::North));
    }

    #[test]
    fn test_no_match_southeast() {
        assert!(!matches("COD", &cod_grid(), 2, 2, Direction::SouthEast));
    }

    #[test]
    fn test_walk_off_top_edge() {
        assert!(!matches("COD", &cod_grid(), 0, 0, Direction::North));
    }

    #[test]
    fn test_start_outside_grid() {
        assert!(!matches("COD", &cod_grid(), 9, 0, Direction::East));
        assert!(!matches("COD", &cod_grid(), 0, 9, Direction::East));
    }

    #[test]
    fn test_single_letter_only_checks_start() {
        let grid = cod_grid();
        for d in Direction::ALL {
            assert!(matches("C", &grid, 0, 0, d));
            assert!(!matches("O", &grid, 0, 0, d));
        }
    }

    #[test]
    fn test_empty_word_never_matches() {
        assert!(!matches("", &cod_grid(), 0, 0, Direction::East));
    }

    #[test]
    fn test_jagged_rows_checked_per_row() {
        // the middle row is too short to hold the 'B' below-right of 'A'
        let grid = Grid::from_rows(["A..", "", "..C"]);
        assert!(!matches("ABC", &grid, 0, 0, Direction::SouthEast));

        let grid = Grid::from_rows(["A...", ".B", "..C"]);
        assert!(matches("ABC", &grid, 0, 0, Direction::SouthEast));
        assert!(matches("CBA", &grid, 2, 2, Direction::NorthWest));
    }

    #[test]
    fn test_matches_letters_agrees_with_matches() {
        let grid = cod_grid();
        let letters: Vec<char> = "COD".chars().collect();
        for (row, col, _) in grid.cells() {
            for d in Direction::ALL {
                assert_eq!(matches("COD", &grid, row, col, d), matches_letters(&letters, &grid, row, col, d));
            }
        }
    }
}

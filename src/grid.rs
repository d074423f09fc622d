//! The letter grid that searches run over.
//!
//! A `Grid` is an ordered list of rows, each an ordered list of `char`s. Rows do
//! not have to be the same length; every column bound is checked against the row
//! it belongs to. Once built, a grid is never modified.
//!
//! Like the rest of the crate this module is **WASM-friendly**: `parse_from_str`
//! works everywhere, while `load_from_path` is only compiled for native targets.
//!
//! The text format is one row per line. Before splitting, the content is cleaned
//! the same way regardless of where it came from:
//! - a leading byte-order mark (U+FEFF) is dropped,
//! - trailing whitespace (including blank lines) is trimmed from the whole content,
//! - rows end at `\n`, `\r\n` or a lone `\r`.

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from anything that yields rows of text.
    ///
    /// No cleaning is done here; each row is taken exactly as given.
    pub fn from_rows<I, S>(rows: I) -> Grid
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Grid {
            rows: rows.into_iter().map(|row| row.as_ref().chars().collect()).collect(),
        }
    }

    /// Parse a grid from in-memory text (see the module docs for the cleaning rules).
    pub fn parse_from_str(contents: &str) -> Grid {
        let contents = contents.strip_prefix(BYTE_ORDER_MARK).unwrap_or(contents).trim_end();

        // `"".lines()` is already empty, so blank input gives an empty grid
        let grid = Grid::from_rows(contents.lines().flat_map(|line| line.split('\r')));
        log::debug!("parsed grid with {} rows", grid.num_rows());
        grid
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::MissingInput` if nothing exists at `path`, and
    /// `SearchError::Io` for any other read failure (including invalid UTF-8).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Grid, crate::errors::SearchError> {
        use crate::errors::SearchError;

        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| {
            let path = path_ref.to_path_buf();
            if source.kind() == std::io::ErrorKind::NotFound {
                SearchError::MissingInput { path, source }
            } else {
                SearchError::Io { path, source }
            }
        })?;

        Ok(Self::parse_from_str(&data))
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `row`, or 0 if there is no such row.
    #[must_use]
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The letter at `(row, col)`, or `None` if that cell is outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row)?.get(col).copied()
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[char]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Every cell as `(row, col, letter)`, in row-major order.
    #[must_use]
    pub fn cells(&self) -> Cells<'_> {
        Cells { grid: self, row: 0, col: 0 }
    }
}

/// Row-major iterator over the cells of a [`Grid`].
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    grid: &'a Grid,
    row: usize,
    col: usize,
}

impl Iterator for Cells<'_> {
    type Item = (usize, usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(row) = self.grid.rows.get(self.row) {
            if let Some(&c) = row.get(self.col) {
                let cell = (self.row, self.col, c);
                self.col += 1;
                return Some(cell);
            }
            self.row += 1;
            self.col = 0;
        }
        None
    }
}

impl std::iter::FusedIterator for Cells<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let grid = Grid::parse_from_str("ABC\nDEF");
        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.row_len(0), 3);
        assert_eq!(grid.get(1, 2), Some('F'));
    }

    #[test]
    fn test_parse_strips_bom_and_trailing_whitespace() {
        let grid = Grid::parse_from_str("\u{feff}FISH\nFISH\n\n  \n");
        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.row(0), Some(&['F', 'I', 'S', 'H'][..]));
    }

    #[test]
    fn test_parse_keeps_leading_spaces_of_first_row() {
        let grid = Grid::parse_from_str(" AB\nCD");
        assert_eq!(grid.row_len(0), 3);
        assert_eq!(grid.get(0, 0), Some(' '));
    }

    #[test]
    fn test_parse_handles_crlf() {
        let grid = Grid::parse_from_str("AB\r\nCD\r\n");
        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.row_len(0), 2);
        assert_eq!(grid.get(1, 1), Some('D'));
    }

    #[test]
    fn test_parse_handles_lone_carriage_returns() {
        let grid = Grid::parse_from_str("AB\rCD\r\nEF\r");
        assert_eq!(grid.num_rows(), 3);
        assert_eq!(grid.row(1), Some(&['C', 'D'][..]));
        assert_eq!(grid.get(2, 1), Some('F'));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(Grid::parse_from_str("").is_empty());
        assert!(Grid::parse_from_str("\u{feff}\n\n").is_empty());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::from_rows(["ABC", "D"]);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.get(1, 1), None);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.row_len(5), 0);
    }

    #[test]
    fn test_cells_skip_empty_rows() {
        let grid = Grid::from_rows(["AB", "", "C"]);
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells, vec![(0, 0, 'A'), (0, 1, 'B'), (2, 0, 'C')]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Grid::load_from_path("definitely/not/here.txt").unwrap_err();
        assert_eq!(err.code(), "E003");
    }

    #[test]
    fn test_load_from_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\u{feff}XMAS\nSAMX\n").unwrap();
        let grid = Grid::load_from_path(file.path()).unwrap();
        assert_eq!(grid, Grid::from_rows(["XMAS", "SAMX"]));
    }
}

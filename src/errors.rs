//! Error types for word searches, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E004) for documentation lookup:
//!
//! - E001: `InvalidSearchTerm` (Word has a repeated letter or is a palindrome)
//! - E002: `InvalidCrossingLength` (Crossing word has an even number of letters)
//! - E003: `MissingInput` (Input file not found)
//! - E004: `Io` (Input file could not be read)
//!
//! # Examples
//!
//! ```
//! use ceres_search::errors::SearchError;
//! use ceres_search::grid::Grid;
//! use ceres_search::scanner::find_locations;
//!
//! let grid = Grid::from_rows(["XMAS"]);
//! match find_locations("ABBA", &grid) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(locations) => println!("Found {}", locations.count()),
//! }
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why a search term was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidTermReason {
    /// The letter appears more than once.
    DuplicateLetter(char),
    /// The term reads the same backwards (this includes the empty and
    /// single-letter terms).
    Palindrome,
}

impl fmt::Display for InvalidTermReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidTermReason::DuplicateLetter(c) => write!(f, "letter '{c}' appears more than once"),
            InvalidTermReason::Palindrome => write!(f, "it is a palindrome"),
        }
    }
}

/// Unified error type for searching and for loading grids.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Invalid search term \"{term}\": {reason}")]
    InvalidSearchTerm { term: String, reason: InvalidTermReason },

    #[error("Crossing word \"{term}\" has {len} letters; it needs an odd number")]
    InvalidCrossingLength { term: String, len: usize },

    #[error("Input file '{}' not found", path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read grid from '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SearchError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::InvalidSearchTerm { .. } => "E001",
            SearchError::InvalidCrossingLength { .. } => "E002",
            SearchError::MissingInput { .. } => "E003",
            SearchError::Io { .. } => "E004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SearchError::InvalidSearchTerm { .. } => "Word has a repeated letter or is a palindrome",
            SearchError::InvalidCrossingLength { .. } => "Crossing word has an even number of letters",
            SearchError::MissingInput { .. } => "Input file not found",
            SearchError::Io { .. } => "Input file could not be read",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SearchError::InvalidSearchTerm { .. } => "A word with a repeated letter, or one that reads the same in both directions, can be found more than once along the same line of cells. The count would then depend on how overlapping readings are treated, so such words are rejected before any searching starts.",
            SearchError::InvalidCrossingLength { .. } => "A crossing is centered on the middle letter of the word. Words with an even number of letters have no single middle letter.",
            SearchError::MissingInput { .. } => "The grid is read from a plain-text file, one row per line. The default file name is resolved against the current working directory.",
            SearchError::Io { .. } => "The input file exists but could not be read, for example because of permissions or because it is not valid UTF-8.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SearchError::InvalidSearchTerm { .. } => Some("Use a word whose letters are all different, e.g. 'XMAS'"),
            SearchError::InvalidCrossingLength { .. } => Some("Use a word with an odd number of letters, e.g. 'MAS'"),
            SearchError::MissingInput { .. } => Some("Make sure to launch this program from the directory containing the input file, or pass --input"),
            SearchError::Io { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_errors() -> Vec<SearchError> {
        vec![
            SearchError::InvalidSearchTerm { term: "ABBA".to_string(), reason: InvalidTermReason::DuplicateLetter('B') },
            SearchError::InvalidCrossingLength { term: "ABCD".to_string(), len: 4 },
            SearchError::MissingInput {
                path: PathBuf::from("nope.txt"),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
            SearchError::Io {
                path: PathBuf::from("bad.txt"),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            },
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = SearchError::InvalidCrossingLength { term: "ABCD".to_string(), len: 4 };
        assert_eq!(err.code(), "E002");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E002"));
        assert!(detailed.contains("odd number"));
    }

    /// Test that all `SearchError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in sample_errors() {
            let code = err.code();
            assert!(code.starts_with("E0"), "Error code '{}' should start with 'E0'", code);
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        for err in sample_errors() {
            let detailed = err.display_detailed();
            assert!(detailed.contains(err.code()));
            assert!(detailed.contains(&err.to_string()));
            if let Some(help) = err.help() {
                assert!(detailed.contains(help));
            }
        }
    }

    #[test]
    fn test_invalid_term_message_names_the_letter() {
        let err = SearchError::InvalidSearchTerm { term: "AA".to_string(), reason: InvalidTermReason::DuplicateLetter('A') };
        assert_eq!(err.to_string(), "Invalid search term \"AA\": letter 'A' appears more than once");
    }

    #[test]
    fn test_missing_input_points_at_working_directory() {
        let err = SearchError::MissingInput {
            path: PathBuf::from("put_puzzle_input_here.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let detailed = err.display_detailed();
        assert!(detailed.contains("put_puzzle_input_here.txt"));
        assert!(detailed.contains("launch this program from the directory"));
    }
}

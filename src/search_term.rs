use crate::errors::{InvalidTermReason, SearchError};
use std::collections::HashSet;

/// A word that has been checked and is safe to count matches for.
///
/// A word with a repeated letter or one that reads the same backwards could be
/// found twice along one line of cells, so the count would be ambiguous. Both
/// are rejected here, before any search starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    text: String,
    letters: Vec<char>,
}

impl SearchTerm {
    /// Validate a word for straight-line searching.
    ///
    /// # Errors
    ///
    /// `SearchError::InvalidSearchTerm` if a letter repeats or the word is a
    /// palindrome (the empty word and single letters count as palindromes).
    pub fn new(term: &str) -> Result<SearchTerm, SearchError> {
        let letters: Vec<char> = term.chars().collect();

        let invalid = |reason| SearchError::InvalidSearchTerm { term: term.to_string(), reason };

        if let Some(c) = first_repeated_letter(&letters) {
            return Err(invalid(InvalidTermReason::DuplicateLetter(c)));
        }
        if letters.iter().eq(letters.iter().rev()) {
            return Err(invalid(InvalidTermReason::Palindrome));
        }

        log::debug!("validated search term {term:?}");
        Ok(SearchTerm { text: term.to_string(), letters })
    }

    /// Validate a word for crossing searches: everything [`SearchTerm::new`]
    /// checks, plus an odd number of letters so there is a single middle letter.
    ///
    /// # Errors
    ///
    /// `SearchError::InvalidSearchTerm` as for [`SearchTerm::new`], then
    /// `SearchError::InvalidCrossingLength` for an even number of letters.
    pub fn for_crossing(term: &str) -> Result<SearchTerm, SearchError> {
        let search_term = SearchTerm::new(term)?;
        if search_term.len() % 2 == 0 {
            return Err(SearchError::InvalidCrossingLength {
                term: term.to_string(),
                len: search_term.len(),
            });
        }
        Ok(search_term)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    // never true for a validated term
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<char> {
        self.letters.first().copied()
    }

    /// How far the middle letter sits from either end.
    #[must_use]
    pub fn half_len(&self) -> usize {
        self.letters.len() / 2
    }

    #[must_use]
    pub fn middle(&self) -> Option<char> {
        self.letters.get(self.half_len()).copied()
    }
}

fn first_repeated_letter(letters: &[char]) -> Option<char> {
    let mut seen = HashSet::with_capacity(letters.len());
    letters.iter().copied().find(|&c| !seen.insert(c))
}

//! Word list loading utilities
//!
//! Builds fixed-length candidate lists from files or embedded constants.

use crate::core::Word;
use crate::error::{CandidateListError, SolverError};
use crate::games::Game;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Immutable, non-empty list of same-length candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    words: Vec<Word>,
    word_length: usize,
}

impl CandidateList {
    /// Build a list from raw lines
    ///
    /// Lines are trimmed and upper-cased; blank lines are ignored. The first
    /// valid word fixes the length; invalid or differently-sized words are
    /// skipped with a warning.
    ///
    /// # Errors
    /// Returns `CandidateListError::Empty` if no valid word remains.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self, CandidateListError> {
        let mut words: Vec<Word> = Vec::new();
        let mut skipped = 0usize;

        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match Word::new(trimmed) {
                Ok(word) if words.first().is_none_or(|first| first.len() == word.len()) => {
                    words.push(word);
                }
                Ok(word) => {
                    warn!("skipping {word}: expected {} letters", words[0].len());
                    skipped += 1;
                }
                Err(e) => {
                    warn!("skipping {trimmed:?}: {e}");
                    skipped += 1;
                }
            }
        }

        let word_length = words.first().map(Word::len).ok_or(CandidateListError::Empty)?;
        if skipped > 0 {
            warn!("skipped {skipped} unusable words");
        }

        Ok(Self { words, word_length })
    }

    /// Convert an embedded string slice
    ///
    /// # Errors
    /// Returns `CandidateListError::Empty` if no valid word remains.
    ///
    /// # Examples
    /// ```
    /// use daily_solver::wordlists::CandidateList;
    ///
    /// let list = CandidateList::from_slice(&["crane", "slate"]).unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.words()[0].text(), "CRANE");
    /// ```
    pub fn from_slice(slice: &[&str]) -> Result<Self, CandidateListError> {
        Self::from_lines(slice.iter().copied())
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; empty lists are rejected at construction
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by text, case-insensitively
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.text().eq_ignore_ascii_case(text))
    }
}

/// Load a newline-delimited word list from a file
///
/// # Errors
///
/// Returns `SolverError::CandidateListUnavailable` if the file cannot be read
/// or holds no usable word.
///
/// # Examples
/// ```no_run
/// use daily_solver::wordlists::load_from_file;
///
/// let words = load_from_file("data/wordle.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CandidateList, SolverError> {
    let path = path.as_ref();
    let unavailable = |reason: CandidateListError| SolverError::CandidateListUnavailable {
        source_name: path.display().to_string(),
        reason,
    };

    let content = fs::read_to_string(path).map_err(|e| unavailable(e.into()))?;
    let list = CandidateList::from_lines(content.lines()).map_err(unavailable)?;

    info!("loaded {} words from {}", list.len(), path.display());
    Ok(list)
}

/// Resolve a game's candidate list: the given file, else the embedded list
///
/// # Errors
///
/// Returns `SolverError::CandidateListUnavailable` if the file fails to load or
/// the game has no embedded list and no file was given.
pub fn for_game(game: Game, path: Option<&Path>) -> Result<CandidateList, SolverError> {
    if let Some(path) = path {
        return load_from_file(path);
    }

    let unavailable = |reason: CandidateListError| SolverError::CandidateListUnavailable {
        source_name: format!("built-in {} list", game.name()),
        reason,
    };

    match game.embedded_words() {
        Some(words) => CandidateList::from_slice(words).map_err(unavailable),
        None => Err(unavailable(CandidateListError::NoBuiltIn(game.name()))),
    }
}

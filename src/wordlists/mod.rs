//! Candidate word lists
//!
//! The Wordle list is embedded at build time; other games load theirs from a
//! newline-delimited file at session start.

mod embedded;
mod loader;

pub use embedded::{WORDLE_WORDS, WORDLE_WORDS_COUNT};
pub use loader::{CandidateList, for_game, load_from_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_const() {
        assert_eq!(WORDLE_WORDS.len(), WORDLE_WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDLE_WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDLE_WORDS.iter().collect();
        assert_eq!(unique.len(), WORDLE_WORDS.len());
    }
}

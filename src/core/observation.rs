//! Single-cell observations fed into the constraint store

use super::{LetterStatus, Pattern, Word};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One revealed cell: `{position, letter, status}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    pub position: usize,
    pub letter: char,
    pub status: LetterStatus,
}

/// Why an observation was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservationError {
    #[error("position {position} is outside a {word_length}-letter word")]
    PositionOutOfRange { position: usize, word_length: usize },
    #[error("{0:?} is not an ASCII letter")]
    InvalidLetter(char),
    #[error("guess {guess} has {guess_len} letters but the pattern has {pattern_len}")]
    PatternLengthMismatch {
        guess: String,
        guess_len: usize,
        pattern_len: usize,
    },
}

impl Observation {
    #[must_use]
    pub const fn new(position: usize, letter: char, status: LetterStatus) -> Self {
        Self {
            position,
            letter,
            status,
        }
    }

    /// Validate against a word length, returning the upper-case letter byte
    ///
    /// # Errors
    /// Returns `ObservationError` if the position is out of range or the
    /// letter is not an ASCII letter.
    pub fn letter_byte(&self, word_length: usize) -> Result<u8, ObservationError> {
        if self.position >= word_length {
            return Err(ObservationError::PositionOutOfRange {
                position: self.position,
                word_length,
            });
        }

        if !self.letter.is_ascii_alphabetic() {
            return Err(ObservationError::InvalidLetter(self.letter));
        }

        // ASCII checked above, so the cast is lossless
        Ok(self.letter.to_ascii_uppercase() as u8)
    }

    /// Expand a guessed word and its feedback pattern into per-cell observations
    ///
    /// # Errors
    /// Returns `ObservationError::PatternLengthMismatch` if the pattern does not
    /// cover every letter of the guess.
    ///
    /// # Examples
    /// ```
    /// use daily_solver::core::{LetterStatus, Observation, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let pattern: Pattern = "-YG--".parse().unwrap();
    /// let observations = Observation::from_guess(&guess, &pattern).unwrap();
    ///
    /// assert_eq!(observations.len(), 5);
    /// assert_eq!(observations[2], Observation::new(2, 'A', LetterStatus::Correct));
    /// ```
    pub fn from_guess(guess: &Word, pattern: &Pattern) -> Result<Vec<Self>, ObservationError> {
        if guess.len() != pattern.len() {
            return Err(ObservationError::PatternLengthMismatch {
                guess: guess.text().to_string(),
                guess_len: guess.len(),
                pattern_len: pattern.len(),
            });
        }

        Ok(guess
            .letters()
            .iter()
            .zip(pattern.statuses())
            .enumerate()
            .map(|(position, (&letter, &status))| Self::new(position, char::from(letter), status))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_byte_uppercases() {
        let obs = Observation::new(1, 'r', LetterStatus::Present);
        assert_eq!(obs.letter_byte(5), Ok(b'R'));
    }

    #[test]
    fn letter_byte_rejects_out_of_range() {
        let obs = Observation::new(5, 'R', LetterStatus::Present);
        assert_eq!(
            obs.letter_byte(5),
            Err(ObservationError::PositionOutOfRange {
                position: 5,
                word_length: 5
            })
        );
    }

    #[test]
    fn letter_byte_rejects_non_letters() {
        for letter in ['3', ' ', 'é', '🟩'] {
            let obs = Observation::new(0, letter, LetterStatus::Absent);
            assert_eq!(
                obs.letter_byte(5),
                Err(ObservationError::InvalidLetter(letter))
            );
        }
    }

    #[test]
    fn wire_shape_deserializes() {
        let json = r#"{"position": 2, "letter": "A", "status": "correct"}"#;
        let obs: Observation = serde_json::from_str(json).unwrap();
        assert_eq!(obs, Observation::new(2, 'A', LetterStatus::Correct));
    }

    #[test]
    fn wire_shape_rejects_unknown_status() {
        let json = r#"{"position": 2, "letter": "A", "status": "green"}"#;
        assert!(serde_json::from_str::<Observation>(json).is_err());
    }

    #[test]
    fn from_guess_rejects_length_mismatch() {
        let guess = Word::new("crane").unwrap();
        let pattern: Pattern = "GY-".parse().unwrap();
        assert!(matches!(
            Observation::from_guess(&guess, &pattern),
            Err(ObservationError::PatternLengthMismatch { .. })
        ));
    }
}

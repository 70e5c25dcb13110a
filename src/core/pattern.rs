//! Wordle feedback pattern calculation and representation
//!
//! A pattern is the row of statuses revealed for one guess. Patterns are parsed
//! from user input ("GY-GY" or emoji) and computed exactly when simulating games.

use super::{LetterStatus, Word};

/// Feedback pattern for a guess, one status per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<LetterStatus>);

impl Pattern {
    /// Create a pattern from explicit statuses
    #[must_use]
    pub const fn new(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }

    /// All-correct pattern for a word length
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self(vec![LetterStatus::Correct; len])
    }

    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool,
    ///    left to right
    ///
    /// # Examples
    /// ```
    /// use daily_solver::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(pattern.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.letters();
        let answer = answer.letters();
        let mut result = vec![LetterStatus::Absent; guess.len()];
        let mut available = [0u8; 26];

        // First pass: greens, and count the answer letters they don't consume
        for (i, &letter) in guess.iter().enumerate() {
            if answer.get(i) == Some(&letter) {
                result[i] = LetterStatus::Correct;
            } else if let Some(&other) = answer.get(i) {
                available[usize::from(other - b'A')] += 1;
            }
        }
        for &other in answer.iter().skip(guess.len()) {
            available[usize::from(other - b'A')] += 1;
        }

        // Second pass: yellows from the remaining pool
        for (i, &letter) in guess.iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            let count = &mut available[usize::from(letter - b'A')];
            if *count > 0 {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Parse a pattern from a string like "GYGGY" or "🟩🟨🟩🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜/⬛ for gray
    ///
    /// # Examples
    /// ```
    /// use daily_solver::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let statuses: Option<Vec<LetterStatus>> =
            s.chars().map(LetterStatus::from_symbol).collect();

        statuses.filter(|s| !s.is_empty()).map(Self)
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use daily_solver::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn calc(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn pattern_perfect_constant() {
        let perfect = Pattern::perfect(5);
        assert!(perfect.is_perfect());
        assert_eq!(perfect.len(), 5);
    }

    #[test]
    fn pattern_all_gray() {
        let pattern = calc("abcde", "fghij");
        assert_eq!(pattern.statuses(), &[Absent; 5]);
        assert!(!pattern.is_perfect());
    }

    #[test]
    fn pattern_all_green() {
        assert!(calc("crane", "crane").is_perfect());
    }

    #[test]
    fn pattern_duplicate_letters_yellow_pool() {
        // SPEED vs ERASE: S yellow, P gray, both E yellow, D gray
        let pattern = calc("speed", "erase");
        assert_eq!(pattern.statuses(), &[Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn pattern_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: second O is green, first O takes the remaining O as yellow
        let pattern = calc("robot", "floor");
        assert_eq!(pattern.statuses(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn pattern_gray_before_green_for_single_letter() {
        // ALLOW vs ATLAS: the only L is consumed by the green at position 2
        let pattern = calc("allow", "atlas");
        assert_eq!(pattern.statuses(), &[Correct, Absent, Correct, Absent, Absent]);
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1 = Pattern::from_str("GYG--").unwrap();
        let p2 = Pattern::from_str("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::from_str("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.statuses(), &[Correct, Present, Correct, Absent, Absent]);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("GXGGY").is_none());
        assert!(Pattern::from_str("").is_none());
    }

    #[test]
    fn pattern_real_wordle_example() {
        let pattern = calc("crane", "slate");
        assert_eq!(pattern.statuses(), &[Absent, Absent, Correct, Absent, Correct]);
    }
}

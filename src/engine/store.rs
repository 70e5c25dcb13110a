//! Constraint store
//!
//! Accumulates per-position and per-letter knowledge from single-cell
//! observations. Letters are kept as upper-case ASCII bytes.

use crate::core::{LetterStatus, Observation, ObservationError};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Knowledge about the hidden word gathered so far in a session
///
/// Invariant: a letter in `absent` is never also in `present` or among the
/// values of `correct`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintStore {
    word_length: usize,
    correct: FxHashMap<usize, u8>,
    present: FxHashSet<u8>,
    absent: FxHashSet<u8>,
}

impl ConstraintStore {
    /// Create an empty store for words of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            correct: FxHashMap::default(),
            present: FxHashSet::default(),
            absent: FxHashSet::default(),
        }
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Apply one observation
    ///
    /// - correct: pin the letter at the position and drop it from the present
    ///   and absent sets
    /// - present: add to present, drop from absent, and clear any correct entry
    ///   at that position
    /// - absent: exclude the letter unless it is already present or correct
    ///   somewhere
    ///
    /// # Errors
    /// Returns `ObservationError` for an out-of-range position or a non-letter;
    /// the store is left unchanged.
    pub fn record(&mut self, observation: &Observation) -> Result<(), ObservationError> {
        let letter = observation.letter_byte(self.word_length)?;
        let position = observation.position;

        match observation.status {
            LetterStatus::Correct => {
                self.correct.insert(position, letter);
                self.absent.remove(&letter);
                self.present.remove(&letter);
            }
            LetterStatus::Present => {
                self.present.insert(letter);
                self.absent.remove(&letter);
                self.correct.remove(&position);
            }
            LetterStatus::Absent => {
                if !self.present.contains(&letter) && !self.is_correct_letter(letter) {
                    self.absent.insert(letter);
                }
            }
        }

        debug!(
            "recorded {} {} at {position}",
            observation.status,
            char::from(letter)
        );
        debug_assert!(self.invariant_holds(), "constraint store invariant broken");

        Ok(())
    }

    /// Clear all knowledge
    pub fn reset(&mut self) {
        self.correct.clear();
        self.present.clear();
        self.absent.clear();
    }

    /// True if no constraint has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.correct.is_empty() && self.present.is_empty() && self.absent.is_empty()
    }

    /// Letter pinned at a position, if any
    #[must_use]
    pub fn correct_at(&self, position: usize) -> Option<u8> {
        self.correct.get(&position).copied()
    }

    /// Iterate over `(position, letter)` pins
    pub fn correct(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.correct.iter().map(|(&p, &l)| (p, l))
    }

    pub fn present(&self) -> impl Iterator<Item = u8> + '_ {
        self.present.iter().copied()
    }

    pub fn absent(&self) -> impl Iterator<Item = u8> + '_ {
        self.absent.iter().copied()
    }

    #[must_use]
    pub fn is_present(&self, letter: u8) -> bool {
        self.present.contains(&letter)
    }

    #[must_use]
    pub fn is_absent(&self, letter: u8) -> bool {
        self.absent.contains(&letter)
    }

    /// True if the letter is pinned at any position
    #[must_use]
    pub fn is_correct_letter(&self, letter: u8) -> bool {
        self.correct.values().any(|&l| l == letter)
    }

    /// Check the absent/present/correct exclusivity invariant
    #[must_use]
    pub fn invariant_holds(&self) -> bool {
        self.absent
            .iter()
            .all(|&l| !self.present.contains(&l) && !self.is_correct_letter(l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};
    use proptest::prelude::*;

    fn obs(position: usize, letter: char, status: LetterStatus) -> Observation {
        Observation::new(position, letter, status)
    }

    #[test]
    fn correct_pins_letter_and_clears_sets() {
        let mut store = ConstraintStore::new(5);
        store.record(&obs(0, 'L', Absent)).unwrap();
        store.record(&obs(3, 'L', Present)).unwrap();
        store.record(&obs(2, 'L', Correct)).unwrap();

        assert_eq!(store.correct_at(2), Some(b'L'));
        assert!(!store.is_present(b'L'));
        assert!(!store.is_absent(b'L'));
    }

    #[test]
    fn present_clears_correct_at_same_position() {
        let mut store = ConstraintStore::new(5);
        store.record(&obs(0, 'C', Correct)).unwrap();
        store.record(&obs(0, 'A', Present)).unwrap();

        assert_eq!(store.correct_at(0), None);
        assert!(store.is_present(b'A'));
    }

    #[test]
    fn present_leaves_other_positions_pinned() {
        let mut store = ConstraintStore::new(5);
        store.record(&obs(0, 'C', Correct)).unwrap();
        store.record(&obs(1, 'C', Present)).unwrap();

        assert_eq!(store.correct_at(0), Some(b'C'));
        assert!(store.is_present(b'C'));
    }

    #[test]
    fn absent_skipped_when_letter_present_or_correct() {
        let mut store = ConstraintStore::new(5);
        store.record(&obs(1, 'L', Present)).unwrap();
        store.record(&obs(2, 'L', Absent)).unwrap();
        assert!(!store.is_absent(b'L'));

        store.record(&obs(0, 'O', Correct)).unwrap();
        store.record(&obs(4, 'O', Absent)).unwrap();
        assert!(!store.is_absent(b'O'));
    }

    #[test]
    fn absent_then_correct_overturns_exclusion() {
        let mut store = ConstraintStore::new(5);
        store.record(&obs(1, 'L', Absent)).unwrap();
        assert!(store.is_absent(b'L'));

        store.record(&obs(2, 'L', Correct)).unwrap();
        assert!(!store.is_absent(b'L'));
        assert!(store.invariant_holds());
    }

    #[test]
    fn lowercase_letters_are_normalized() {
        let mut store = ConstraintStore::new(5);
        store.record(&obs(0, 'c', Correct)).unwrap();
        assert_eq!(store.correct_at(0), Some(b'C'));
    }

    #[test]
    fn invalid_observation_leaves_store_untouched() {
        let mut store = ConstraintStore::new(5);
        store.record(&obs(0, 'C', Correct)).unwrap();
        let before = store.clone();

        assert!(store.record(&obs(5, 'R', Present)).is_err());
        assert!(store.record(&obs(1, '?', Absent)).is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn reset_clears_everything() {
        let mut store = ConstraintStore::new(5);
        store.record(&obs(0, 'C', Correct)).unwrap();
        store.record(&obs(1, 'R', Present)).unwrap();
        store.record(&obs(2, 'X', Absent)).unwrap();

        store.reset();
        assert!(store.is_empty());
        assert_eq!(store, ConstraintStore::new(5));
    }

    fn arb_observation() -> impl Strategy<Value = Observation> {
        (
            0..5usize,
            prop::sample::select(vec!['A', 'E', 'L', 'O', 'R', 'S']),
            prop::sample::select(vec![Correct, Present, Absent]),
        )
            .prop_map(|(p, l, s)| Observation::new(p, l, s))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// The exclusivity invariant survives any sequence of observations
        #[test]
        fn invariant_holds_after_any_sequence(
            observations in prop::collection::vec(arb_observation(), 0..40)
        ) {
            let mut store = ConstraintStore::new(5);
            for o in &observations {
                store.record(o).unwrap();
                prop_assert!(store.invariant_holds());
            }
        }

        /// Recording the same correct observation twice equals recording it once
        #[test]
        fn correct_is_idempotent(
            prefix in prop::collection::vec(arb_observation(), 0..20),
            position in 0..5usize,
            letter in prop::sample::select(vec!['A', 'E', 'L', 'O', 'R', 'S']),
        ) {
            let mut once = ConstraintStore::new(5);
            for o in &prefix {
                once.record(o).unwrap();
            }
            let mut twice = once.clone();

            let pin = Observation::new(position, letter, Correct);
            once.record(&pin).unwrap();
            twice.record(&pin).unwrap();
            twice.record(&pin).unwrap();

            prop_assert_eq!(once, twice);
        }
    }
}

//! Candidate filter
//!
//! Narrows a word list to the words consistent with a constraint store.

use super::ConstraintStore;
use crate::core::{Word, letter_bit};

/// A store's constraints compiled into letter masks
struct Rules {
    pins: Vec<(usize, u8)>,
    required: u32,
    excluded: u32,
}

impl Rules {
    fn compile(store: &ConstraintStore) -> Self {
        let pins: Vec<(usize, u8)> = store.correct().collect();
        let pinned = pins.iter().fold(0, |mask, &(_, l)| mask | letter_bit(l));
        let required = store.present().fold(0, |mask, l| mask | letter_bit(l));
        let absent = store.absent().fold(0, |mask, l| mask | letter_bit(l));

        // An absent letter that is also present or pinned elsewhere is left to
        // the other two rules (duplicate letters)
        let excluded = absent & !(required | pinned);

        Self {
            pins,
            required,
            excluded,
        }
    }

    fn admits(&self, word: &Word) -> bool {
        let mask = word.letter_mask();

        self.pins
            .iter()
            .all(|&(position, letter)| word.letter_at(position) == Some(letter))
            && mask & self.required == self.required
            && mask & self.excluded == 0
    }
}

/// Filter candidates to those consistent with every recorded constraint
///
/// A word survives iff it has each pinned letter at its position, contains
/// every present letter, and contains no absent letter (unless that letter is
/// also present or pinned). Input order is preserved; an empty result means no
/// candidate is consistent.
#[must_use]
pub fn filter<'a>(candidates: &'a [Word], store: &ConstraintStore) -> Vec<&'a Word> {
    let rules = Rules::compile(store);
    candidates.iter().filter(|w| rules.admits(w)).collect()
}

/// Check a single word against the store
#[must_use]
pub fn is_consistent(word: &Word, store: &ConstraintStore) -> bool {
    Rules::compile(store).admits(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, Observation};
    use LetterStatus::{Absent, Correct, Present};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(filtered: &[&Word]) -> Vec<String> {
        filtered.iter().map(|w| w.text().to_string()).collect()
    }

    fn store_with(observations: &[(usize, char, LetterStatus)]) -> ConstraintStore {
        let mut store = ConstraintStore::new(5);
        for &(p, l, s) in observations {
            store.record(&Observation::new(p, l, s)).unwrap();
        }
        store
    }

    #[test]
    fn empty_store_admits_everything() {
        let list = words(&["CRANE", "SLATE", "TRACE"]);
        let store = ConstraintStore::new(5);
        assert_eq!(filter(&list, &store).len(), 3);
    }

    #[test]
    fn duplicate_letter_absent_then_correct_keeps_word() {
        let list = words(&["ALLOW"]);
        let store = store_with(&[(1, 'L', Absent), (2, 'L', Correct)]);
        assert_eq!(texts(&filter(&list, &store)), vec!["ALLOW"]);
    }

    #[test]
    fn scenario_excludes_all_three_words() {
        // C, N and E are absent; R is present; A is pinned at 2.
        // CRANE and TRACE contain C and E, BRAVE contains E.
        let list = words(&["CRANE", "TRACE", "BRAVE"]);
        let store = store_with(&[
            (0, 'C', Absent),
            (1, 'R', Present),
            (2, 'A', Correct),
            (3, 'N', Absent),
            (4, 'E', Absent),
        ]);
        assert!(filter(&list, &store).is_empty());
    }

    #[test]
    fn scenario_keeps_consistent_word() {
        let list = words(&["CRANE", "GRAIL", "TRACE", "BRAVE", "DRAWL"]);
        let store = store_with(&[
            (0, 'C', Absent),
            (1, 'R', Present),
            (2, 'A', Correct),
            (3, 'N', Absent),
            (4, 'E', Absent),
        ]);
        assert_eq!(texts(&filter(&list, &store)), vec!["GRAIL", "DRAWL"]);
    }

    #[test]
    fn present_requires_letter_anywhere() {
        let list = words(&["CRANE", "SLOTH", "OTHER"]);
        let store = store_with(&[(0, 'O', Present)]);
        assert_eq!(texts(&filter(&list, &store)), vec!["SLOTH", "OTHER"]);
    }

    #[test]
    fn correct_requires_exact_position() {
        let list = words(&["CRANE", "SLATE", "TRACE"]);
        let store = store_with(&[(0, 'T', Correct)]);
        assert_eq!(texts(&filter(&list, &store)), vec!["TRACE"]);
    }

    #[test]
    fn contradiction_exhausts_candidates() {
        let list = words(&["CRANE", "SLATE", "TRACE"]);
        let store = store_with(&[(0, 'Z', Correct)]);
        assert!(filter(&list, &store).is_empty());
    }

    #[test]
    fn shorter_words_fail_pins_past_their_end() {
        let list = words(&["CRAN"]);
        let store = store_with(&[(4, 'E', Correct)]);
        assert!(filter(&list, &store).is_empty());
    }

    #[test]
    fn is_consistent_matches_filter() {
        let list = words(&["CRANE", "SLATE", "TRACE"]);
        let store = store_with(&[(4, 'E', Correct), (0, 'S', Absent)]);
        let filtered = filter(&list, &store);
        for word in &list {
            assert_eq!(is_consistent(word, &store), filtered.contains(&word));
        }
    }

    #[test]
    fn reset_restores_full_list() {
        let list = words(&["CRANE", "SLATE", "TRACE"]);
        let mut store = store_with(&[(0, 'T', Correct), (1, 'Q', Absent)]);
        store.reset();
        let filtered: Vec<Word> = filter(&list, &store).into_iter().cloned().collect();
        assert_eq!(filtered, list);
    }
}

//! Letter-frequency ranking
//!
//! Scores each candidate by how common its distinct letters are across the
//! candidate set and picks the highest. Greedy and deterministic; no claim of
//! optimality.

use crate::core::Word;

/// Per-letter count of candidates containing that letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequencies([usize; 26]);

impl LetterFrequencies {
    /// Count each distinct letter once per word
    #[must_use]
    pub fn from_words(words: &[&Word]) -> Self {
        let mut counts = [0usize; 26];
        for word in words {
            for letter in word.distinct_letters() {
                counts[usize::from(letter - b'A')] += 1;
            }
        }
        Self(counts)
    }

    /// Number of words containing `letter` (0 for non-letters)
    #[must_use]
    pub fn get(&self, letter: u8) -> usize {
        if letter.is_ascii_uppercase() {
            self.0[usize::from(letter - b'A')]
        } else {
            0
        }
    }

    /// Sum of the frequencies of the word's distinct letters
    #[must_use]
    pub fn score(&self, word: &Word) -> usize {
        word.distinct_letters().map(|l| self.get(l)).sum()
    }
}

/// Pick the best candidate, or `None` for an empty set
///
/// Ties go to the earliest word in input order.
///
/// # Examples
/// ```
/// use daily_solver::core::Word;
/// use daily_solver::engine::rank;
///
/// let words: Vec<Word> = ["CRANE", "SLATE", "TRACE"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = words.iter().collect();
///
/// assert_eq!(rank(&refs).map(Word::text), Some("TRACE"));
/// ```
#[must_use]
pub fn rank<'a>(candidates: &[&'a Word]) -> Option<&'a Word> {
    let frequencies = LetterFrequencies::from_words(candidates);

    let mut best: Option<(&'a Word, usize)> = None;
    for &word in candidates {
        let score = frequencies.score(word);
        // Strictly greater keeps the first maximal word
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((word, score));
        }
    }

    best.map(|(word, _)| word)
}

/// Candidates with their scores, best first (stable for ties)
#[must_use]
pub fn ranked<'a>(candidates: &[&'a Word]) -> Vec<(&'a Word, usize)> {
    let frequencies = LetterFrequencies::from_words(candidates);
    let mut scored: Vec<(&'a Word, usize)> = candidates
        .iter()
        .map(|&w| (w, frequencies.score(w)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn frequencies_count_distinct_letters_once() {
        let list = words(&["ALLOW", "LLAMA"]);
        let refs: Vec<&Word> = list.iter().collect();
        let freq = LetterFrequencies::from_words(&refs);

        assert_eq!(freq.get(b'L'), 2);
        assert_eq!(freq.get(b'A'), 2);
        assert_eq!(freq.get(b'M'), 1);
        assert_eq!(freq.get(b'Z'), 0);
    }

    #[test]
    fn scores_example_set() {
        // C2 R2 A3 N1 E3 S1 L1 T2
        let list = words(&["CRANE", "SLATE", "TRACE"]);
        let refs: Vec<&Word> = list.iter().collect();
        let freq = LetterFrequencies::from_words(&refs);

        assert_eq!(freq.score(&list[0]), 11);
        assert_eq!(freq.score(&list[1]), 10);
        assert_eq!(freq.score(&list[2]), 12);
    }

    #[test]
    fn rank_is_deterministic() {
        let list = words(&["CRANE", "SLATE", "TRACE"]);
        let refs: Vec<&Word> = list.iter().collect();

        let first = rank(&refs).unwrap();
        for _ in 0..10 {
            assert_eq!(rank(&refs), Some(first));
        }
        assert_eq!(first.text(), "TRACE");
    }

    #[test]
    fn rank_breaks_ties_by_input_order() {
        // Anagrams score identically
        let list = words(&["STALE", "SLATE", "LEAST"]);
        let refs: Vec<&Word> = list.iter().collect();
        assert_eq!(rank(&refs).map(Word::text), Some("STALE"));

        let reversed: Vec<&Word> = list.iter().rev().collect();
        assert_eq!(rank(&reversed).map(Word::text), Some("LEAST"));
    }

    #[test]
    fn rank_empty_is_none() {
        assert_eq!(rank(&[]), None);
    }

    #[test]
    fn ranked_orders_best_first() {
        let list = words(&["CRANE", "SLATE", "TRACE"]);
        let refs: Vec<&Word> = list.iter().collect();
        let order: Vec<&str> = ranked(&refs).iter().map(|(w, _)| w.text()).collect();
        assert_eq!(order, vec!["TRACE", "CRANE", "SLATE"]);
    }
}

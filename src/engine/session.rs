//! Puzzle session: a candidate list plus the constraints observed so far

use super::{ConstraintStore, filter, rank};
use crate::core::{Observation, Word};
use crate::error::SolverError;
use crate::wordlists::CandidateList;
use log::{info, warn};
use std::fmt;
use std::sync::Arc;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing recorded since the session started or was reset
    Empty,
    /// Observations recorded and at least one candidate remains
    Observing,
    /// One candidate remains and every position is pinned
    Solved,
    /// No candidate is consistent; only a reset leaves this phase
    Exhausted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Observing => "observing",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// Point-in-time summary of a session for display layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub remaining: usize,
    pub suggestion: Option<String>,
}

/// Constraint knowledge for one puzzle instance
///
/// The candidate list is shared and never mutated; the store is bounded by
/// [`Session::reset`] calls.
#[derive(Debug, Clone)]
pub struct Session {
    candidates: Arc<CandidateList>,
    store: ConstraintStore,
    observed: usize,
}

impl Session {
    #[must_use]
    pub fn new(candidates: Arc<CandidateList>) -> Self {
        let store = ConstraintStore::new(candidates.word_length());
        info!(
            "session started with {} candidates of length {}",
            candidates.len(),
            candidates.word_length()
        );
        Self {
            candidates,
            store,
            observed: 0,
        }
    }

    /// Apply one observation
    ///
    /// # Errors
    /// Returns `SolverError::InvalidObservation` for malformed input; nothing
    /// is recorded in that case.
    pub fn record(&mut self, observation: &Observation) -> Result<(), SolverError> {
        self.store.record(observation)?;
        self.observed += 1;
        Ok(())
    }

    /// Apply observations in order, stopping at the first malformed one
    ///
    /// # Errors
    /// Returns the first `SolverError::InvalidObservation`; earlier
    /// observations stay recorded.
    pub fn record_all<'o>(
        &mut self,
        observations: impl IntoIterator<Item = &'o Observation>,
    ) -> Result<(), SolverError> {
        for observation in observations {
            self.record(observation)?;
        }
        Ok(())
    }

    /// Clear all constraints for a new puzzle or a resync
    pub fn reset(&mut self) {
        self.store.reset();
        self.observed = 0;
        info!("session reset");
    }

    /// Reset, then apply a full board's observations
    ///
    /// Malformed observations are logged and skipped so one bad cell does not
    /// hide the rest of the board.
    pub fn replay<'o>(&mut self, observations: impl IntoIterator<Item = &'o Observation>) {
        self.reset();
        for observation in observations {
            if let Err(e) = self.record(observation) {
                warn!("skipping observation during replay: {e}");
            }
        }
    }

    #[must_use]
    pub const fn store(&self) -> &ConstraintStore {
        &self.store
    }

    #[must_use]
    pub fn candidate_list(&self) -> &CandidateList {
        &self.candidates
    }

    /// Number of observations recorded since the last reset
    #[must_use]
    pub const fn observed(&self) -> usize {
        self.observed
    }

    /// Candidates consistent with everything recorded so far
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        filter(self.candidates.words(), &self.store)
    }

    /// Best next guess, or `None` when no candidate is consistent
    #[must_use]
    pub fn suggest(&self) -> Option<&Word> {
        rank(&self.candidates())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.observed == 0 {
            return Phase::Empty;
        }
        self.phase_of(&self.candidates())
    }

    fn phase_of(&self, filtered: &[&Word]) -> Phase {
        match filtered {
            [] => Phase::Exhausted,
            [only] if self.is_fully_pinned(only) => Phase::Solved,
            _ => Phase::Observing,
        }
    }

    fn is_fully_pinned(&self, word: &Word) -> bool {
        word.letters()
            .iter()
            .enumerate()
            .all(|(position, &letter)| self.store.correct_at(position) == Some(letter))
    }

    /// Phase, remaining count and suggestion computed from one filter pass
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let filtered = self.candidates();
        let phase = if self.observed == 0 {
            Phase::Empty
        } else {
            self.phase_of(&filtered)
        };

        SessionSnapshot {
            phase,
            remaining: filtered.len(),
            suggestion: rank(&filtered).map(|w| w.text().to_string()),
        }
    }
}

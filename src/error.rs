//! Error types surfaced by the solving engine

use crate::core::ObservationError;
use std::io;
use thiserror::Error;

/// Errors from recording observations or starting a session
#[derive(Debug, Error)]
pub enum SolverError {
    /// Malformed observation; the constraint store was not touched
    #[error(transparent)]
    InvalidObservation(#[from] ObservationError),

    /// The candidate word list could not be loaded
    #[error("candidate list unavailable from {source_name}")]
    CandidateListUnavailable {
        source_name: String,
        #[source]
        reason: CandidateListError,
    },
}

/// Why a candidate list could not be produced
#[derive(Debug, Error)]
pub enum CandidateListError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("no valid words")]
    Empty,

    #[error("game {0} has no built-in word list; pass --wordlist")]
    NoBuiltIn(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn chained_messages_are_not_repeated() {
        let invalid = SolverError::from(ObservationError::PositionOutOfRange {
            position: 5,
            word_length: 5,
        });
        let chain = format!("{:#}", anyhow!(invalid).context("recording feedback for CRANES"));
        assert_eq!(chain, "recording feedback for CRANES: position 5 is outside a 5-letter word");

        let unavailable = SolverError::CandidateListUnavailable {
            source_name: "words.txt".to_string(),
            reason: CandidateListError::Empty,
        };
        assert_eq!(
            format!("{:#}", anyhow!(unavailable)),
            "candidate list unavailable from words.txt: no valid words"
        );
    }
}

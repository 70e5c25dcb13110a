//! One-shot suggestion command
//!
//! Applies guesses given as `WORD=PATTERN` and/or a JSON file of observations,
//! then reports the session state and the best next guess.

use crate::core::{Observation, Pattern, Word};
use crate::engine::{Phase, Session, ranked};
use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;

/// How many ranked candidates to report alongside the suggestion
const TOP_CANDIDATES: usize = 10;

/// Result of a suggestion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestResult {
    pub phase: Phase,
    pub remaining: usize,
    pub suggestion: Option<String>,
    /// Best candidates with their frequency scores
    pub top: Vec<(String, usize)>,
}

/// Parse a `WORD=PATTERN` guess, e.g. `crane=-YG--`
///
/// # Errors
/// Returns an error if the separator is missing, the word is invalid, or the
/// pattern does not parse.
pub fn parse_guess(input: &str) -> Result<(Word, Pattern)> {
    let (word, pattern) = input
        .split_once('=')
        .ok_or_else(|| anyhow!("expected WORD=PATTERN, got {input:?}"))?;

    let word = Word::new(word.trim()).with_context(|| format!("invalid guess word in {input:?}"))?;
    let pattern = Pattern::from_str(pattern.trim())
        .ok_or_else(|| anyhow!("invalid pattern in {input:?}; use G/Y/- or emoji"))?;

    Ok((word, pattern))
}

/// Read a JSON array of `{position, letter, status}` observations
///
/// # Errors
/// Returns an error if the file cannot be read or decoded.
pub fn load_observations(path: &Path) -> Result<Vec<Observation>> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("decoding observations in {}", path.display()))
}

/// Apply the guesses, then the loose observations, and rank what survives
///
/// # Errors
/// Returns an error on the first malformed guess or observation.
pub fn suggest(
    session: &mut Session,
    guesses: &[(Word, Pattern)],
    observations: &[Observation],
) -> Result<SuggestResult> {
    for (word, pattern) in guesses {
        let cells = Observation::from_guess(word, pattern)?;
        session
            .record_all(&cells)
            .with_context(|| format!("applying guess {word}"))?;
    }
    session.record_all(observations)?;

    let snapshot = session.snapshot();
    let top = ranked(&session.candidates())
        .into_iter()
        .take(TOP_CANDIDATES)
        .map(|(w, score)| (w.text().to_string(), score))
        .collect();

    Ok(SuggestResult {
        phase: snapshot.phase,
        remaining: snapshot.remaining,
        suggestion: snapshot.suggestion,
        top,
    })
}

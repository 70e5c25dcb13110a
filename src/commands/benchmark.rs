//! Benchmark command
//!
//! Plays the engine against words from the candidate list using exact Wordle
//! feedback and reports how many guesses each game took.

use crate::core::{Observation, Pattern, Word};
use crate::engine::Session;
use crate::error::SolverError;
use crate::output::formatters::create_progress_bar;
use crate::wordlists::CandidateList;
use anyhow::Result;
use indicatif::ProgressBar;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Which targets to play and how long a game may run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Play only the first N words of the list
    pub limit: Option<usize>,
    /// Play N randomly chosen words instead; takes precedence over `limit`
    pub sample: Option<usize>,
    pub seed: u64,
    /// A game not solved within this many guesses counts as a failure
    pub max_guesses: usize,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            limit: None,
            sample: None,
            seed: 0,
            max_guesses: 6,
            show_progress: true,
        }
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub target: String,
    pub guesses: Vec<String>,
    pub solved: bool,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count → number of solved games
    pub distribution: HashMap<usize, usize>,
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick the target words for a run
#[must_use]
pub fn select_targets<'a>(words: &'a [Word], config: &BenchmarkConfig) -> Vec<&'a Word> {
    if let Some(n) = config.sample {
        let mut rng = StdRng::seed_from_u64(config.seed);
        return words.choose_multiple(&mut rng, n).collect();
    }
    words.iter().take(config.limit.unwrap_or(words.len())).collect()
}

/// Play one game against `target`, following the session's suggestions
#[must_use]
pub fn play_game(candidates: &Arc<CandidateList>, target: &Word, max_guesses: usize) -> GameOutcome {
    let mut session = Session::new(Arc::clone(candidates));
    let mut guesses = Vec::new();
    let mut solved = false;

    while guesses.len() < max_guesses {
        let Some(guess) = session.suggest().cloned() else {
            debug!("{target}: no candidates left after {} guesses", guesses.len());
            break;
        };

        let pattern = Pattern::calculate(&guess, target);
        guesses.push(guess.text().to_string());
        if pattern.is_perfect() {
            solved = true;
            break;
        }

        let recorded = Observation::from_guess(&guess, &pattern)
            .map_err(SolverError::from)
            .and_then(|observations| session.record_all(&observations));
        if let Err(e) = recorded {
            warn!("{target}: abandoning game: {e}");
            break;
        }
    }

    GameOutcome {
        target: target.text().to_string(),
        guesses,
        solved,
    }
}

/// Run the benchmark over the selected targets in parallel
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid.
pub fn run_benchmark(candidates: &Arc<CandidateList>, config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    let targets = select_targets(candidates.words(), config);
    info!("benchmarking {} targets", targets.len());

    let progress = if config.show_progress {
        create_progress_bar(targets.len() as u64)?
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let outcomes: Vec<GameOutcome> = targets
        .par_iter()
        .map(|target| {
            let outcome = play_game(candidates, target, config.max_guesses);
            progress.inc(1);
            outcome
        })
        .collect();
    progress.finish_and_clear();

    Ok(summarize(&outcomes, start.elapsed()))
}

/// Fold game outcomes into aggregate statistics
#[must_use]
pub fn summarize(outcomes: &[GameOutcome], duration: Duration) -> BenchmarkResult {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    for outcome in outcomes {
        let n = outcome.guesses.len();
        if outcome.solved {
            total_guesses += n;
            min_guesses = min_guesses.min(n);
            max_guesses = max_guesses.max(n);
            *distribution.entry(n).or_insert(0) += 1;
        } else {
            failures.push(outcome.target.clone());
        }
    }

    let solved = outcomes.len() - failures.len();
    BenchmarkResult {
        total_words: outcomes.len(),
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: outcomes.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["CRANE", "TRACE", "BRAVE", "GRAIL", "DRAWL", "SLATE", "ATLAS", "HELLO"];

    fn list() -> Arc<CandidateList> {
        Arc::new(CandidateList::from_slice(WORDS).unwrap())
    }

    fn quiet(config: BenchmarkConfig) -> BenchmarkConfig {
        BenchmarkConfig {
            show_progress: false,
            ..config
        }
    }

    #[test]
    fn every_game_ends_within_limit() {
        let list = list();
        for target in list.words() {
            let outcome = play_game(&list, target, 6);
            assert!(!outcome.guesses.is_empty());
            assert!(outcome.guesses.len() <= 6);
            if outcome.solved {
                assert_eq!(outcome.guesses.last(), Some(&outcome.target));
            }
        }
    }

    #[test]
    fn first_guess_is_the_top_ranked_word() {
        let list = list();
        let expected = Session::new(Arc::clone(&list)).suggest().cloned().unwrap();
        let outcome = play_game(&list, &list.words()[0], 6);
        assert_eq!(outcome.guesses[0], expected.text());
    }

    #[test]
    fn benchmark_counts_add_up() {
        let result = run_benchmark(&list(), &quiet(BenchmarkConfig::default())).unwrap();

        assert_eq!(result.total_words, WORDS.len());
        assert_eq!(result.solved + result.failures.len(), result.total_words);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        for &guesses in result.distribution.keys() {
            assert!((1..=6).contains(&guesses));
        }
    }

    #[test]
    fn limit_takes_a_prefix() {
        let list = list();
        let config = BenchmarkConfig {
            limit: Some(3),
            ..BenchmarkConfig::default()
        };
        let targets = select_targets(list.words(), &config);
        let texts: Vec<&str> = targets.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["CRANE", "TRACE", "BRAVE"]);
    }

    #[test]
    fn seeded_sample_is_reproducible() {
        let list = list();
        let config = BenchmarkConfig {
            sample: Some(4),
            seed: 42,
            ..BenchmarkConfig::default()
        };
        let first = select_targets(list.words(), &config);
        let second = select_targets(list.words(), &config);

        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
    }

    #[test]
    fn summarize_empty_run() {
        let result = summarize(&[], Duration::from_millis(1));
        assert_eq!(result.total_words, 0);
        assert_eq!(result.solved, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn summarize_separates_failures() {
        let outcomes = [
            GameOutcome {
                target: "CRANE".into(),
                guesses: vec!["TRACE".into(), "CRANE".into()],
                solved: true,
            },
            GameOutcome {
                target: "HELLO".into(),
                guesses: vec!["TRACE".into(); 6],
                solved: false,
            },
        ];
        let result = summarize(&outcomes, Duration::from_secs(1));

        assert_eq!(result.solved, 1);
        assert_eq!(result.failures, ["HELLO"]);
        assert_eq!(result.distribution.get(&2), Some(&1));
        assert!((result.average_guesses - 2.0).abs() < f64::EPSILON);
    }
}

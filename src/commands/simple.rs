//! Simple interactive CLI mode
//!
//! Line-based solver without TUI

use super::suggest::parse_guess;
use crate::core::{Observation, Pattern, Word};
use crate::engine::{Phase, Session};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates are listed once the pool is this small
const LIST_THRESHOLD: usize = 10;

/// What the player typed at the feedback prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    New,
    Undo,
    /// Feedback for the suggested word
    Feedback(Pattern),
    /// A guess the player chose themselves
    Manual(Word, Pattern),
    Invalid,
}

fn parse_input(line: &str, word_length: usize) -> Input {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Input::Quit,
        "new" | "n" => return Input::New,
        "undo" | "u" => return Input::Undo,
        "win" | "correct" | "yes" | "solved" => {
            return Input::Feedback(Pattern::perfect(word_length));
        }
        _ => {}
    }

    if line.contains('=') {
        return parse_guess(line).map_or(Input::Invalid, |(word, pattern)| Input::Manual(word, pattern));
    }
    Pattern::from_str(line).map_or(Input::Invalid, Input::Feedback)
}

/// Rebuild the session from the guess history
fn replay(session: &mut Session, history: &[(Word, Pattern)]) {
    let observations: Vec<Observation> = history
        .iter()
        .filter_map(|(word, pattern)| Observation::from_guess(word, pattern).ok())
        .flatten()
        .collect();
    session.replay(&observations);
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the prompt loop over arbitrary reader and writer
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(session: &mut Session, input: &mut R, out: &mut W) -> Result<()> {
    let word_length = session.candidate_list().word_length();

    writeln!(out, "\nDaily solver - interactive mode\n")?;
    writeln!(out, "After each guess, enter the feedback pattern:")?;
    writeln!(out, "  - G/g/🟩 for correct position")?;
    writeln!(out, "  - Y/y/🟨 for wrong position")?;
    writeln!(out, "  - -/_/⬜ for not in word")?;
    writeln!(out, "  - 'win' if the suggestion was right")?;
    writeln!(out, "  - WORD=PATTERN to enter a guess of your own")?;
    writeln!(out, "Commands: 'quit', 'new', 'undo'\n")?;

    let mut history: Vec<(Word, Pattern)> = Vec::new();

    loop {
        let candidates = session.candidates();
        let suggestion = session.suggest().cloned();

        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "Turn {}: {} candidates remaining ({})",
            history.len() + 1,
            candidates.len(),
            session.phase()
        )?;
        writeln!(out, "{}", "─".repeat(60))?;

        match &suggestion {
            Some(word) => writeln!(out, "\nSuggested guess: {}\n", word.text().bright_yellow().bold())?,
            None => {
                writeln!(out, "\nNo candidates remain; the feedback may be wrong.")?;
                writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;
            }
        }

        if !candidates.is_empty() && candidates.len() <= LIST_THRESHOLD {
            writeln!(out, "Remaining candidates:")?;
            for candidate in &candidates {
                writeln!(out, "  • {candidate}")?;
            }
            writeln!(out)?;
        }

        let Some(line) = prompt(input, out, "Feedback")? else {
            return Ok(());
        };

        let (guess, pattern) = match parse_input(&line, word_length) {
            Input::Quit => {
                writeln!(out, "\nThanks for playing!\n")?;
                return Ok(());
            }
            Input::New => {
                history.clear();
                session.reset();
                writeln!(out, "\nNew puzzle started.\n")?;
                continue;
            }
            Input::Undo => {
                if history.pop().is_some() {
                    replay(session, &history);
                    writeln!(out, "Undone.\n")?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
                continue;
            }
            Input::Invalid => {
                writeln!(out, "Invalid input! Use G/Y/-, 'win', or WORD=PATTERN\n")?;
                continue;
            }
            Input::Feedback(pattern) => match suggestion {
                Some(word) => (word, pattern),
                None => {
                    writeln!(out, "No suggestion to give feedback on; use WORD=PATTERN\n")?;
                    continue;
                }
            },
            Input::Manual(word, pattern) => (word, pattern),
        };

        if guess.len() != word_length {
            writeln!(out, "Rejected: {guess} is not {word_length} letters long\n")?;
            continue;
        }
        let observations = match Observation::from_guess(&guess, &pattern) {
            Ok(observations) => observations,
            Err(e) => {
                writeln!(out, "Rejected: {e}\n")?;
                continue;
            }
        };
        if let Err(e) = session.record_all(&observations) {
            replay(session, &history);
            writeln!(out, "Rejected: {e}\n")?;
            continue;
        }
        history.push((guess, pattern));

        if session.phase() == Phase::Solved || history.last().is_some_and(|(_, p)| p.is_perfect()) {
            print_victory(out, &history)?;
            history.clear();
            session.reset();
        }
    }
}

fn print_victory<W: Write>(out: &mut W, history: &[(Word, Pattern)]) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", "    S O L V E D !".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\n  Solution found in {} {}",
        history.len().to_string().bright_cyan().bold(),
        if history.len() == 1 { "guess" } else { "guesses" }
    )?;

    writeln!(out, "\n  Guess history:")?;
    for (i, (word, pattern)) in history.iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().bright_white().bold(),
            pattern.to_emoji()
        )?;
    }
    writeln!(out, "\nStarting a new puzzle.\n")?;
    Ok(())
}

/// Print a prompt and read one line; `None` on end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

//! Loldle game state
//!
//! Each guess row is read as its text plus one verdict per cell. Numeric
//! columns add a too-low/too-high hint that is shown but never filtered on.

use super::{Board, BoardError, BoardRow, Cell};
use crate::core::{LetterStatus, OrderHint};
use serde::Deserialize;

/// Verdict class shown on a Loldle cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    Correct,
    Partial,
    Incorrect,
    TooLow,
    TooHigh,
    /// Anything unrecognized reads as incorrect
    #[serde(other)]
    Unknown,
}

impl Verdict {
    /// Status fed to the constraint store; `None` for ordering hints
    #[must_use]
    pub const fn status(self) -> Option<LetterStatus> {
        match self {
            Self::Correct => Some(LetterStatus::Correct),
            Self::Partial => Some(LetterStatus::Present),
            Self::Incorrect | Self::Unknown => Some(LetterStatus::Absent),
            Self::TooLow | Self::TooHigh => None,
        }
    }

    #[must_use]
    pub const fn hint(self) -> Option<OrderHint> {
        match self {
            Self::TooLow => Some(OrderHint::TooLow),
            Self::TooHigh => Some(OrderHint::TooHigh),
            _ => None,
        }
    }

    fn cell(self, letter: char) -> Cell {
        Cell {
            letter,
            status: self.status(),
            hint: self.hint(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GameState {
    #[serde(default)]
    guesses: Vec<String>,
    #[serde(default)]
    results: Vec<Vec<Verdict>>,
}

/// Decode `{"guesses": [...], "results": [[verdict, ...], ...]}`
///
/// Guesses and results are paired row by row; extra entries on either side
/// are ignored, as are letters beyond a row's verdicts.
///
/// # Errors
/// Returns `BoardError::Json` for malformed input.
pub fn parse_board(json: &str) -> Result<Board, BoardError> {
    let state: GameState = serde_json::from_str(json)?;

    let rows = state
        .guesses
        .iter()
        .zip(&state.results)
        .map(|(guess, verdicts)| {
            let guess = guess.to_uppercase();
            let cells = guess
                .chars()
                .zip(verdicts)
                .map(|(letter, verdict)| verdict.cell(letter))
                .collect();
            BoardRow { guess, cells }
        })
        .collect();

    Ok(Board::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Observation;

    #[test]
    fn verdicts_map_to_statuses() {
        assert_eq!(Verdict::Correct.status(), Some(LetterStatus::Correct));
        assert_eq!(Verdict::Partial.status(), Some(LetterStatus::Present));
        assert_eq!(Verdict::Incorrect.status(), Some(LetterStatus::Absent));
        assert_eq!(Verdict::TooLow.status(), None);
        assert_eq!(Verdict::TooHigh.hint(), Some(OrderHint::TooHigh));
    }

    #[test]
    fn parses_rows_and_hints() {
        let json = r#"{
            "guesses": ["ahri"],
            "results": [["correct", "partial", "too-low", "sparkly"]]
        }"#;
        let board = parse_board(json).unwrap();
        let row = &board.rows[0];

        assert_eq!(row.guess, "AHRI");
        assert_eq!(row.cells[2].hint, Some(OrderHint::TooLow));
        assert_eq!(row.cells[3].status, Some(LetterStatus::Absent));

        let observations: Vec<Observation> = row.observations().collect();
        assert_eq!(observations.len(), 3);
        assert_eq!(observations[1], Observation::new(1, 'H', LetterStatus::Present));
    }

    #[test]
    fn unpaired_entries_are_ignored() {
        let json = r#"{"guesses": ["ahri", "ashe"], "results": [["correct"]]}"#;
        let board = parse_board(json).unwrap();

        assert_eq!(board.rows.len(), 1);
        assert_eq!(board.rows[0].cells.len(), 1);
    }

    #[test]
    fn empty_state_is_empty_board() {
        assert!(parse_board("{}").unwrap().is_empty());
    }
}

//! Board model shared by every game

use crate::core::{LetterStatus, Observation, OrderHint};
use thiserror::Error;

/// One revealed cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: char,
    /// `None` when the cell carries only an ordering hint
    pub status: Option<LetterStatus>,
    pub hint: Option<OrderHint>,
}

impl Cell {
    #[must_use]
    pub const fn new(letter: char, status: LetterStatus) -> Self {
        Self {
            letter,
            status: Some(status),
            hint: None,
        }
    }
}

/// One submitted guess and its cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub guess: String,
    pub cells: Vec<Cell>,
}

impl BoardRow {
    /// A row with every letter marked with the same status
    #[must_use]
    pub fn uniform(guess: &str, status: LetterStatus) -> Self {
        Self {
            guess: guess.to_string(),
            cells: guess.chars().map(|letter| Cell::new(letter, status)).collect(),
        }
    }

    /// Per-cell observations, skipping hint-only cells
    pub fn observations(&self) -> impl Iterator<Item = Observation> + '_ {
        self.cells.iter().enumerate().filter_map(|(position, cell)| {
            cell.status
                .map(|status| Observation::new(position, cell.letter, status))
        })
    }
}

/// Every submitted guess so far, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub rows: Vec<BoardRow>,
}

impl Board {
    #[must_use]
    pub const fn new(rows: Vec<BoardRow>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All observations, row-major
    #[must_use]
    pub fn observations(&self) -> Vec<Observation> {
        self.rows.iter().flat_map(BoardRow::observations).collect()
    }

    /// True if `earlier` is an unchanged prefix of this board
    #[must_use]
    pub fn extends(&self, earlier: &Self) -> bool {
        self.rows.len() >= earlier.rows.len() && self.rows[..earlier.rows.len()] == earlier.rows[..]
    }
}

/// Errors decoding a persisted game state
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("malformed game state: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no storage entry starting with {0:?}")]
    MissingState(&'static str),

    #[error("game state holds no states")]
    NoStates,
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct};

    #[test]
    fn observations_are_row_major() {
        let board = Board::new(vec![
            BoardRow::uniform("AB", Absent),
            BoardRow::uniform("CD", Correct),
        ]);
        let observations = board.observations();

        assert_eq!(observations.len(), 4);
        assert_eq!(observations[0], Observation::new(0, 'A', Absent));
        assert_eq!(observations[3], Observation::new(1, 'D', Correct));
    }

    #[test]
    fn hint_only_cells_are_skipped() {
        let row = BoardRow {
            guess: "AB".to_string(),
            cells: vec![
                Cell {
                    letter: 'A',
                    status: None,
                    hint: Some(OrderHint::TooLow),
                },
                Cell::new('B', Correct),
            ],
        };
        let observations: Vec<_> = row.observations().collect();
        assert_eq!(observations, vec![Observation::new(1, 'B', Correct)]);
    }

    #[test]
    fn extends_checks_prefix() {
        let one = Board::new(vec![BoardRow::uniform("CRANE", Absent)]);
        let two = Board::new(vec![
            BoardRow::uniform("CRANE", Absent),
            BoardRow::uniform("SLOTH", Absent),
        ]);
        let changed = Board::new(vec![BoardRow::uniform("CRANE", Correct)]);

        assert!(two.extends(&one));
        assert!(one.extends(&Board::default()));
        assert!(!one.extends(&two));
        assert!(!changed.extends(&one));
    }
}

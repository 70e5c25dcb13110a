//! Supported games
//!
//! A static registry of the games the solver understands, plus the board
//! model their persisted state decodes into.

mod board;
pub mod loldle;
pub mod wordle;

pub use board::{Board, BoardError, BoardRow, Cell};

use std::fmt;

/// A known daily game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    /// NYT Wordle: five letters, correct/present/absent
    Wordle,
    /// Loldle classic: correct/partial/incorrect plus ordering hints
    Loldle,
}

impl Game {
    /// Every registered game
    pub const ALL: [Self; 2] = [Self::Wordle, Self::Loldle];

    /// Look a game up by name, case-insensitively
    ///
    /// # Examples
    /// ```
    /// use daily_solver::games::Game;
    ///
    /// assert_eq!(Game::from_name("Wordle"), Some(Game::Wordle));
    /// assert_eq!(Game::from_name("chess"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|game| game.name().eq_ignore_ascii_case(name.trim()))
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wordle => "wordle",
            Self::Loldle => "loldle",
        }
    }

    /// Page the game is played on
    #[must_use]
    pub const fn url(self) -> &'static str {
        match self {
            Self::Wordle => "https://www.nytimes.com/games/wordle/index.html",
            Self::Loldle => "https://loldle.net/classic",
        }
    }

    /// Word list compiled into the binary, if the game ships one
    #[must_use]
    pub const fn embedded_words(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Wordle => Some(crate::wordlists::WORDLE_WORDS),
            Self::Loldle => None,
        }
    }

    /// Decode the game's persisted state into a board
    ///
    /// # Errors
    /// Returns `BoardError` if the JSON is malformed or holds no game state.
    pub fn parse_board(self, json: &str) -> Result<Board, BoardError> {
        match self {
            Self::Wordle => wordle::parse_board(json),
            Self::Loldle => loldle::parse_board(json),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

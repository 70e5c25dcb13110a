//! Where boards come from

use crate::games::{Board, Game};
use anyhow::{Context, Result};
use log::debug;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Something the poller can read a board from
pub trait BoardSource: Send {
    /// Read the current board
    ///
    /// `Ok(None)` means nothing is available yet (e.g. the game has not been
    /// opened); the poller simply tries again next tick.
    ///
    /// # Errors
    /// Returns an error if the state exists but cannot be read or decoded.
    fn read_board(&mut self) -> Result<Option<Board>>;
}

/// A game-state file exported from the browser, re-read on every poll
#[derive(Debug, Clone)]
pub struct FileSource {
    game: Game,
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(game: Game, path: impl Into<PathBuf>) -> Self {
        Self {
            game,
            path: path.into(),
        }
    }
}

impl BoardSource for FileSource {
    fn read_board(&mut self) -> Result<Option<Board>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} not found yet", self.path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        let board = self
            .game
            .parse_board(&json)
            .with_context(|| format!("decoding {} state in {}", self.game, self.path.display()))?;
        Ok(Some(board))
    }
}

/// A fixed sequence of boards, one per poll, then nothing
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    boards: VecDeque<Board>,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(boards: impl IntoIterator<Item = Board>) -> Self {
        Self {
            boards: boards.into_iter().collect(),
        }
    }
}

impl BoardSource for ScriptedSource {
    fn read_board(&mut self) -> Result<Option<Board>> {
        Ok(self.boards.pop_front())
    }
}

//! Observation feed
//!
//! A poller thread reads the game board from a [`BoardSource`], diffs it
//! against the previous read and sends [`FeedMessage`]s over a channel. A
//! single applier thread owns every write to the shared session and publishes
//! a [`FeedUpdate`] after each sync.

mod applier;
mod poller;
mod source;

pub use applier::{FeedUpdate, SharedSession, spawn_applier};
pub use poller::{PollerConfig, diff, spawn_poller};
pub use source::{BoardSource, FileSource, ScriptedSource};

use crate::core::Observation;
use crate::games::Board;

/// Message from the poller to the applier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedMessage {
    /// The board no longer extends what was seen; clear the session
    Reset,
    /// One revealed cell
    Observe(Observation),
    /// The session now mirrors this board
    Synced(Board),
}

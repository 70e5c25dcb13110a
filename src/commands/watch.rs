//! Watch command
//!
//! Mirrors a live game by polling its exported state and reporting each new
//! board together with the session snapshot.

use crate::engine::Session;
use crate::feed::{BoardSource, FeedUpdate, FileSource, PollerConfig, SharedSession, spawn_applier, spawn_poller};
use crate::games::Game;
use crate::wordlists::CandidateList;
use anyhow::{Result, anyhow};
use log::info;
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Settings for `watch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Game state file exported from the browser
    pub state_file: PathBuf,
    pub interval: Duration,
    /// Stop after this many polls; `None` watches until interrupted
    pub max_polls: Option<usize>,
}

impl WatchConfig {
    #[must_use]
    pub fn new(state_file: impl Into<PathBuf>) -> Self {
        Self {
            state_file: state_file.into(),
            interval: PollerConfig::default().interval,
            max_polls: None,
        }
    }

    #[must_use]
    pub const fn poller(&self) -> PollerConfig {
        PollerConfig {
            interval: self.interval,
            max_polls: self.max_polls,
        }
    }
}

/// Watch a game's state file, calling `on_update` for each change
///
/// # Errors
///
/// Returns an error if a feed thread panics.
pub fn run_watch(
    game: Game,
    candidates: Arc<CandidateList>,
    config: &WatchConfig,
    on_update: impl FnMut(&FeedUpdate),
) -> Result<SharedSession> {
    info!(
        "watching {} for {game} ({})",
        config.state_file.display(),
        game.url()
    );
    let source = FileSource::new(game, &config.state_file);
    let session = Arc::new(Mutex::new(Session::new(candidates)));
    watch_source(source, Arc::clone(&session), config.poller(), on_update)?;
    Ok(session)
}

/// Wire a board source to the session through the poller and applier threads
///
/// Consecutive identical updates are reported once. Returns how many were
/// reported, once the poller has finished and the applier has drained.
///
/// # Errors
///
/// Returns an error if a feed thread panics.
pub fn watch_source<S>(
    source: S,
    session: SharedSession,
    poller: PollerConfig,
    mut on_update: impl FnMut(&FeedUpdate),
) -> Result<usize>
where
    S: BoardSource + 'static,
{
    let (feed_tx, feed_rx) = mpsc::channel();
    let (events_tx, events_rx) = mpsc::channel();

    let applier = spawn_applier(session, feed_rx, events_tx);
    let poller = spawn_poller(source, poller, feed_tx);

    let mut last: Option<FeedUpdate> = None;
    let mut reported = 0;
    for update in events_rx {
        if last.as_ref() != Some(&update) {
            on_update(&update);
            reported += 1;
            last = Some(update);
        }
    }

    poller.join().map_err(|_| anyhow!("poller thread panicked"))?;
    applier.join().map_err(|_| anyhow!("applier thread panicked"))?;
    Ok(reported)
}

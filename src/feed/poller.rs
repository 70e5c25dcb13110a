//! Board poller thread

use super::{BoardSource, FeedMessage};
use crate::games::Board;
use log::{debug, info, warn};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How often and how many times to poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerConfig {
    pub interval: Duration,
    /// Stop after this many polls; `None` polls until the receiver hangs up
    pub max_polls: Option<usize>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_polls: None,
        }
    }
}

/// Messages that bring a session mirroring `previous` up to `current`
///
/// Unchanged boards produce nothing. A board that only gained rows sends the
/// new rows' observations; any other change resets and replays everything.
#[must_use]
pub fn diff(previous: &Board, current: &Board) -> Vec<FeedMessage> {
    if current == previous {
        return Vec::new();
    }

    let (mut messages, rows) = if current.extends(previous) {
        (Vec::new(), &current.rows[previous.rows.len()..])
    } else {
        (vec![FeedMessage::Reset], &current.rows[..])
    };

    messages.extend(
        rows.iter()
            .flat_map(|row| row.observations())
            .map(FeedMessage::Observe),
    );
    messages.push(FeedMessage::Synced(current.clone()));
    messages
}

/// Spawn the poller thread
///
/// The first successful read always ends with a `Synced` message so the
/// display gets an initial snapshot. Read errors are logged and retried.
pub fn spawn_poller<S>(mut source: S, config: PollerConfig, tx: Sender<FeedMessage>) -> JoinHandle<()>
where
    S: BoardSource + 'static,
{
    thread::spawn(move || {
        let mut last = Board::default();
        let mut synced_once = false;
        let mut polls = 0usize;

        loop {
            match source.read_board() {
                Ok(Some(board)) => {
                    let mut messages = diff(&last, &board);
                    if messages.is_empty() && !synced_once {
                        messages.push(FeedMessage::Synced(board.clone()));
                    }
                    if !messages.is_empty() {
                        info!("board changed: {} rows", board.rows.len());
                    }

                    for message in messages {
                        if tx.send(message).is_err() {
                            debug!("applier hung up; poller stopping");
                            return;
                        }
                    }
                    last = board;
                    synced_once = true;
                }
                Ok(None) => debug!("no board available yet"),
                Err(e) => warn!("failed to read board: {e:#}"),
            }

            polls += 1;
            if config.max_polls.is_some_and(|max| polls >= max) {
                debug!("poller finished after {polls} polls");
                return;
            }
            thread::sleep(config.interval);
        }
    })
}

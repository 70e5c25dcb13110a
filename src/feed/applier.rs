//! Single-writer applier thread

use super::FeedMessage;
use crate::engine::{Session, SessionSnapshot};
use crate::games::Board;
use log::{debug, info, warn};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

/// Session shared between the applier and readers
pub type SharedSession = Arc<Mutex<Session>>;

/// Published after each sync: the mirrored board and where the session stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUpdate {
    pub board: Board,
    pub snapshot: SessionSnapshot,
}

/// Spawn the thread that applies feed messages to the session
///
/// Only this thread writes to the session. After each `Synced` message it
/// publishes the synced board with a session snapshot; the thread ends when
/// the poller hangs up.
pub fn spawn_applier(
    session: SharedSession,
    rx: Receiver<FeedMessage>,
    events: Sender<FeedUpdate>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        for message in rx {
            let mut session = session.lock().unwrap_or_else(PoisonError::into_inner);

            match message {
                FeedMessage::Reset => session.reset(),
                FeedMessage::Observe(observation) => {
                    if let Err(e) = session.record(&observation) {
                        warn!("dropping observation {observation:?}: {e}");
                    }
                }
                FeedMessage::Synced(board) => {
                    let snapshot = session.snapshot();
                    info!(
                        "synced {} rows: {} with {} candidates",
                        board.rows.len(),
                        snapshot.phase,
                        snapshot.remaining
                    );
                    if events.send(FeedUpdate { board, snapshot }).is_err() {
                        debug!("display hung up; applier stopping");
                        return;
                    }
                }
            }
        }
    })
}

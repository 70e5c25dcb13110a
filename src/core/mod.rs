//! Core domain types
//!
//! Words, per-cell statuses, observations and feedback patterns. Everything
//! here is pure and independent of any game or display surface.

mod observation;
mod pattern;
mod status;
mod word;

pub use observation::{Observation, ObservationError};
pub use pattern::Pattern;
pub use status::{LetterStatus, OrderHint};
pub use word::{Word, WordError};

pub(crate) use word::letter_bit;

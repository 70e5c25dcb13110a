//! Constraint-tracking and candidate-filtering engine
//!
//! Observations go into a [`ConstraintStore`]; [`filter`] narrows a word list
//! against it and [`rank`] picks a single suggestion. [`Session`] ties the
//! three together with a shared candidate list.

mod filter;
mod rank;
mod session;
mod store;

pub use filter::{filter, is_consistent};
pub use rank::{LetterFrequencies, rank, ranked};
pub use session::{Phase, Session, SessionSnapshot};
pub use store::ConstraintStore;

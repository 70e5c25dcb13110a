//! Daily Solver
//!
//! Constraint tracking and candidate filtering for daily word-guessing games
//! (Wordle, Loldle).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use daily_solver::core::{LetterStatus, Observation};
//! use daily_solver::engine::Session;
//! use daily_solver::games::Game;
//! use daily_solver::wordlists;
//! use std::sync::Arc;
//!
//! let words = wordlists::for_game(Game::Wordle, None).unwrap();
//! let mut session = Session::new(Arc::new(words));
//!
//! session.record(&Observation::new(0, 'C', LetterStatus::Absent)).unwrap();
//! session.record(&Observation::new(2, 'A', LetterStatus::Correct)).unwrap();
//!
//! println!("{} candidates left", session.candidates().len());
//! if let Some(guess) = session.suggest() {
//!     println!("Try {guess}");
//! }
//! ```

// Core domain types
pub mod core;

// Constraint store, filter, ranking, sessions
pub mod engine;

// Error types
pub mod error;

// Game registry and persisted board states
pub mod games;

// Word lists
pub mod wordlists;

// Background board polling
pub mod feed;

// Logging setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

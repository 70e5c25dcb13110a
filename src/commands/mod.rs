//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod suggest;
pub mod watch;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use simple::run_simple;
pub use suggest::{SuggestResult, load_observations, parse_guess, suggest};
pub use watch::{WatchConfig, run_watch};

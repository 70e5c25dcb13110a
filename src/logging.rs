//! Minimal stderr logger behind the `log` facade

use log::{LevelFilter, Metadata, Record};
use std::env;
use std::io::Write;

/// Environment variable consulted when no level is given on the command line
pub const LOG_ENV: &str = "DAILY_SOLVER_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr().lock(),
                "{:<5} {} - {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Pick the level: explicit flag, then `DAILY_SOLVER_LOG`, then `warn`
#[must_use]
pub fn resolve_level(flag: Option<&str>) -> LevelFilter {
    flag.map(str::to_string)
        .or_else(|| env::var(LOG_ENV).ok())
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the logger; later calls only adjust the level
pub fn init_logging(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Temporarily silence logging, restoring the previous level on drop
///
/// Used while the terminal UI owns the screen.
pub struct Silenced(LevelFilter);

impl Silenced {
    #[must_use]
    pub fn new() -> Self {
        let previous = log::max_level();
        log::set_max_level(LevelFilter::Off);
        Self(previous)
    }
}

impl Default for Silenced {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Silenced {
    fn drop(&mut self) {
        log::set_max_level(self.0);
    }
}

//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, GridRow, Message, MessageStyle, run_tui};

//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use crate::games::{BoardRow, Cell};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// Create the progress bar used by long-running commands
///
/// # Errors
///
/// Returns an error if the bar template fails to parse.
pub fn create_progress_bar(len: u64) -> Result<ProgressBar, indicatif::style::TemplateError> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed}")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}

/// Horizontal bar proportional to `value / max`
#[must_use]
pub fn proportion_bar(value: usize, max: usize, width: usize) -> (String, String) {
    let filled = if max == 0 { 0 } else { (value * width / max).min(width) };
    ("█".repeat(filled), "░".repeat(width - filled))
}

fn colored_cell(cell: &Cell) -> ColoredString {
    let arrow = cell.hint.map_or(' ', |hint| hint.arrow());
    let label = format!(" {}{arrow} ", cell.letter);
    match cell.status {
        Some(LetterStatus::Correct) => label.black().on_green(),
        Some(LetterStatus::Present) => label.black().on_yellow(),
        Some(LetterStatus::Absent) => label.white().on_bright_black(),
        // ordering hints mark a miss on a numeric column
        None => label.white().on_red(),
    }
}

/// One board row as colored tiles, with ↑/↓ on hinted cells
#[must_use]
pub fn board_row(row: &BoardRow) -> String {
    row.cells.iter().map(|cell| colored_cell(cell).to_string()).collect()
}

/// Join the first `max` words, noting how many were left out
#[must_use]
pub fn word_preview<S: AsRef<str>>(words: &[S], max: usize) -> String {
    let shown: Vec<&str> = words.iter().take(max).map(AsRef::as_ref).collect();
    let mut preview = shown.join(", ");
    if words.len() > max {
        preview.push_str(&format!(" … (+{} more)", words.len() - max));
    }
    preview
}

//! TUI application state and logic
//!
//! The grid mirrors the game board: one row per guess, each cell holding the
//! color the player set. Every edit rebuilds the session from the whole grid.

use crate::core::{LetterStatus, Observation, Word};
use crate::engine::{Phase, Session, is_consistent};
use crate::logging::Silenced;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the panel
const MAX_MESSAGES: usize = 5;

/// One guess on the grid and the color of each of its cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub guess: Word,
    pub statuses: Vec<LetterStatus>,
}

impl GridRow {
    /// A freshly added row is all gray
    #[must_use]
    pub fn new(guess: Word) -> Self {
        let statuses = vec![LetterStatus::Absent; guess.len()];
        Self { guess, statuses }
    }

    fn observations(&self) -> impl Iterator<Item = Observation> + '_ {
        self.guess
            .letters()
            .iter()
            .zip(&self.statuses)
            .enumerate()
            .map(|(position, (&letter, &status))| Observation::new(position, char::from(letter), status))
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    session: Session,
    pub rows: Vec<GridRow>,
    /// (row, column) of the highlighted cell
    pub cursor: (usize, usize),
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            rows: Vec::new(),
            cursor: (0, 0),
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Type your guess and press Enter, then Space to color its cells.",
            MessageStyle::Info,
        );
        app
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.session.candidate_list().word_length()
    }

    /// Replay the whole grid into the session
    fn rebuild(&mut self) {
        let observations: Vec<Observation> = self.rows.iter().flat_map(GridRow::observations).collect();
        self.session.replay(&observations);

        match self.session.phase() {
            Phase::Exhausted => self.add_message(
                "No candidates fit the grid; check the colors.",
                MessageStyle::Error,
            ),
            Phase::Solved => {
                if let Some(answer) = self.session.suggest() {
                    let text = format!("Solved: {answer}");
                    self.add_message(&text, MessageStyle::Success);
                }
            }
            Phase::Empty | Phase::Observing => {}
        }
    }

    fn push_row(&mut self, guess: Word) {
        self.rows.push(GridRow::new(guess));
        self.cursor = (self.rows.len() - 1, 0);
        self.rebuild();
    }

    /// Enter: add the typed word as a new all-gray row
    pub fn submit_word(&mut self) {
        let text = std::mem::take(&mut self.input_buffer);
        match Word::new(text.as_str()) {
            Ok(word) if word.len() == self.word_length() => {
                if self.session.candidate_list().find(word.text()).is_none() {
                    let msg = format!("{word} is not in the word list");
                    self.add_message(&msg, MessageStyle::Info);
                } else if !is_consistent(&word, self.session.store()) {
                    let msg = format!("{word} cannot be the answer any more");
                    self.add_message(&msg, MessageStyle::Info);
                }
                self.push_row(word);
            }
            Ok(_) => {
                let msg = format!("Guesses must be {} letters", self.word_length());
                self.add_message(&msg, MessageStyle::Error);
            }
            Err(e) => {
                let msg = format!("Invalid guess: {e}");
                self.add_message(&msg, MessageStyle::Error);
            }
        }
    }

    /// Tab: add the current suggestion as a new row
    pub fn add_suggestion(&mut self) {
        match self.session.suggest().cloned() {
            Some(word) => self.push_row(word),
            None => self.add_message("No suggestion available", MessageStyle::Error),
        }
    }

    /// Space: cycle the highlighted cell absent → present → correct
    pub fn cycle_cell(&mut self) {
        let (row, col) = self.cursor;
        if let Some(status) = self.rows.get_mut(row).and_then(|r| r.statuses.get_mut(col)) {
            *status = status.cycle();
            self.rebuild();
        }
    }

    /// Move the cursor, staying on the grid
    pub fn move_cursor(&mut self, rows: isize, cols: isize) {
        if self.rows.is_empty() {
            return;
        }
        let (row, col) = self.cursor;
        let row = row.saturating_add_signed(rows).min(self.rows.len() - 1);
        let col = col
            .saturating_add_signed(cols)
            .min(self.rows[row].statuses.len().saturating_sub(1));
        self.cursor = (row, col);
    }

    /// Backspace on an empty buffer: drop the newest row
    pub fn drop_last_row(&mut self) {
        if self.rows.pop().is_some() {
            let row = self.rows.len().saturating_sub(1);
            self.cursor = (row, self.cursor.1.min(self.word_length().saturating_sub(1)));
            self.rebuild();
            self.add_message("Removed last row", MessageStyle::Info);
        }
    }

    /// Ctrl-R: clear the grid for a new puzzle
    pub fn reset(&mut self) {
        self.rows.clear();
        self.cursor = (0, 0);
        self.input_buffer.clear();
        self.session.reset();
        self.add_message("New puzzle started", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Char(' ') => self.cycle_cell(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < self.word_length() {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Enter => self.submit_word(),
            KeyCode::Tab => self.add_suggestion(),
            KeyCode::Backspace => {
                if self.input_buffer.pop().is_none() {
                    self.drop_last_row();
                }
            }
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// Logging is silenced while the alternate screen is active.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    let _quiet = Silenced::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only key presses; Windows also reports releases
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::LetterStatus;
use crate::engine::Phase;
use crate::output::formatters::word_preview;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed in the info panel
const PREVIEW_WORDS: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Grid and info
            Constraint::Length(3), // Input
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_help(f, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "DAILY SOLVER - {} letters, {} words",
        app.word_length(),
        app.session().candidate_list().len()
    );
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn cell_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .rows
        .iter()
        .enumerate()
        .map(|(r, row)| {
            let spans: Vec<Span> = row
                .guess
                .letters()
                .iter()
                .zip(&row.statuses)
                .enumerate()
                .map(|(c, (&letter, &status))| {
                    let mut style = Style::default()
                        .fg(Color::Black)
                        .bg(cell_color(status))
                        .add_modifier(Modifier::BOLD);
                    if app.cursor == (r, c) {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
                    }
                    Span::styled(format!(" {} ", char::from(letter)), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let content = if lines.is_empty() {
        vec![Line::from(Span::styled(
            "No guesses yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        lines
    };

    let grid = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_state(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_state(f: &mut Frame, app: &App, area: Rect) {
    let session = app.session();
    let phase = session.phase();
    let candidates = session.candidates();
    let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();

    let phase_color = match phase {
        Phase::Empty => Color::Gray,
        Phase::Observing => Color::Cyan,
        Phase::Solved => Color::Green,
        Phase::Exhausted => Color::Red,
    };

    let suggestion = session.suggest().map_or_else(
        || Span::styled("none", Style::default().fg(Color::Red)),
        |word| {
            Span::styled(
                word.text().to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        },
    );

    let content = vec![
        Line::from(vec![
            Span::raw("Phase:      "),
            Span::styled(phase.to_string(), Style::default().fg(phase_color)),
        ]),
        Line::from(format!("Candidates: {}", candidates.len())),
        Line::from(vec![Span::raw("Suggestion: "), suggestion]),
        Line::from(""),
        Line::from(Span::styled(
            word_preview(&texts, PREVIEW_WORDS),
            Style::default().fg(Color::Green),
        )),
    ];

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Solver ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Guess ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Enter: add row | Space: cycle color | Arrows: move | Tab: add suggestion | \
         Backspace: drop row | Ctrl-R: reset | Esc: quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Session;
    use crate::wordlists::CandidateList;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_grid_and_state() {
        let list = CandidateList::from_slice(&["CRANE", "TRACE", "GRAIL"]).unwrap();
        let mut app = App::new(Session::new(Arc::new(list)));
        app.input_buffer = "GRAIL".into();
        app.submit_word();

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains(" G  R  A  I  L "));
        assert!(text.contains("Phase:      exhausted"));
        assert!(text.contains("Candidates: 0"));
    }
}

//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::Draft;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Item counts shown on the right of the status bar
fn counts_summary(draft: &Draft) -> String {
    format!(
        "{} personas · {} subreddits · {} queries",
        draft.personas.len(),
        draft.subreddits.len(),
        draft.queries.len()
    )
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let right = format!("{} → {} ", counts_summary(app.form.draft()), app.table());
    let right_width = right.chars().count() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    let left = match &app.state.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(vec![
            Span::styled(" Ctrl+C", Style::default().fg(Color::Cyan)),
            Span::raw(": quit"),
        ]),
    };

    frame.render_widget(
        Paragraph::new(left).style(Style::default().bg(Color::Black)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(right).style(Style::default().fg(Color::DarkGray).bg(Color::Black)),
        chunks[1],
    );
}

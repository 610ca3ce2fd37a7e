//! Content entry form rendering

use super::field_renderer::{draw_field_with_value, draw_list_field, list_height};
use crate::app::App;
use crate::state::{ActionButton, FormFocus, ListKind};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the content entry form with its action panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

const SUBTITLE: &str = "Configure your content strategy parameters";

/// Draw the form fields
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let draft = app.form.draft();
    let focus = app.state.focus;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(6), // Company info
            Constraint::Length(list_height(draft.personas.len())),
            Constraint::Length(list_height(draft.subreddits.len())),
            Constraint::Length(list_height(draft.queries.len())),
            Constraint::Length(3), // Posts per week
            Constraint::Length(1), // Help text
            Constraint::Min(0),    // Remaining space
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Content Entry ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let subtitle = Paragraph::new(SUBTITLE).style(Style::default().fg(Color::Gray));
    frame.render_widget(subtitle, chunks[0]);

    draw_field_with_value(
        frame,
        chunks[1],
        "Company Info",
        &draft.company_info,
        focus == FormFocus::CompanyInfo,
        true,
    );

    for (chunk, kind) in chunks[2..5].iter().zip(ListKind::ALL) {
        let active = match focus {
            FormFocus::Item(k, index) if k == kind => Some(index),
            _ => None,
        };
        draw_list_field(
            frame,
            *chunk,
            kind,
            draft.list(kind),
            active,
            draft.can_remove(kind),
        );
    }

    draw_field_with_value(
        frame,
        chunks[5],
        "Number of Posts Per Week",
        &draft.posts_per_week.to_string(),
        focus == FormFocus::PostsPerWeek,
        false,
    );

    let help = Paragraph::new(Line::from(help_spans(focus)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[6]);
}

/// Key hints for the focused target
fn help_spans(focus: FormFocus) -> Vec<Span<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let mut spans = vec![key("Tab"), Span::raw(": next field  ")];
    match focus {
        FormFocus::CompanyInfo => {
            spans.push(key("Enter"));
            spans.push(Span::raw(": new line  "));
        }
        FormFocus::Item(..) => {
            spans.push(key(crate::platform::ADD_ITEM_SHORTCUT));
            spans.push(Span::raw(": add  "));
            spans.push(key(crate::platform::REMOVE_ITEM_SHORTCUT));
            spans.push(Span::raw(": remove  "));
        }
        FormFocus::PostsPerWeek => {}
        FormFocus::Actions => {
            spans.push(key("↑/↓"));
            spans.push(Span::raw(": select  "));
            spans.push(key("Enter"));
            spans.push(Span::raw(": run  "));
        }
    }
    spans.push(key(crate::platform::SUBMIT_SHORTCUT));
    spans.push(Span::raw(": submit"));
    spans
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.focus == FormFocus::Actions;
    let selected = app.state.selected_button;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Length(BUTTON_HEIGHT), // Quit
            Constraint::Min(0),
        ])
        .split(inner_area);

    for (chunk, button) in button_chunks.iter().zip(ActionButton::ALL) {
        let accent = match button {
            ActionButton::Submit => Color::Green,
            ActionButton::Reset => Color::Yellow,
            ActionButton::Quit => Color::Gray,
        };
        render_action_button(
            frame,
            *chunk,
            button.label(),
            is_focused && selected == button,
            Some(accent),
        );
    }
}

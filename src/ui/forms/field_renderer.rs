//! Field rendering utilities for forms

use crate::state::{self, ListKind};
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Cursor marker drawn after the text of the active field
const CURSOR: &str = "▌";

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a bordered text field with a label and a cursor when active
pub fn draw_field_with_value(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
) {
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled(
        if is_active { CURSOR } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if value.is_empty() && !is_active {
        Paragraph::new(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ))
    } else if is_multiline {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::styled(value, text_style), cursor]))
    };

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    // Keep the cursor line in view while editing
    let inner = block.inner(area);
    let scroll = if is_active && is_multiline {
        cursor_scroll(value, inner.width, inner.height)
    } else {
        0
    };

    frame.render_widget(
        content
            .wrap(Wrap { trim: false })
            .block(block)
            .scroll((scroll, 0)),
        area,
    );
}

/// Rows to scroll so the last wrapped row (the one holding the cursor) is
/// visible in a `width` x `height` viewport
fn cursor_scroll(value: &str, width: u16, height: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = value
        .split('\n')
        .map(|line| (line.chars().count() + 1).div_ceil(width))
        .sum();
    u16::try_from(rows.saturating_sub(usize::from(height))).unwrap_or(u16::MAX)
}

/// Draw one of the variable-length lists.
///
/// Each row shows its placeholder label ("Persona 1") and value. `active`
/// is the focused row index when the list has focus.
pub fn draw_list_field(
    frame: &mut Frame,
    area: Rect,
    kind: ListKind,
    items: &[state::ListItem],
    active: Option<usize>,
    can_remove: bool,
) {
    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let is_active = active == Some(index);
            let label_style = if is_active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let mut spans = vec![Span::styled(
                format!("{:<13}", kind.item_label(index)),
                label_style,
            )];
            if item.value.is_empty() && !is_active {
                spans.push(Span::styled("(empty)", Style::default().fg(Color::DarkGray)));
            } else {
                spans.push(Span::raw(item.value.clone()));
            }
            if is_active {
                spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut block = Block::default()
        .title(format!(" {} ", kind.title()))
        .borders(Borders::ALL)
        .border_style(border_style(active.is_some()));
    if active.is_some() {
        let hint = if can_remove {
            format!(
                " {}: add  {}: remove ",
                crate::platform::ADD_ITEM_SHORTCUT,
                crate::platform::REMOVE_ITEM_SHORTCUT
            )
        } else {
            format!(" {}: add ", crate::platform::ADD_ITEM_SHORTCUT)
        };
        block = block.title_bottom(Line::from(hint).right_aligned());
    }

    let list = List::new(rows).block(block);
    render_scrollable_list(frame, area, list, active);
}

/// Height a list section needs to show every row
pub fn list_height(items: usize) -> u16 {
    items as u16 + 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Draft;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(draw).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_list_height_includes_borders() {
        assert_eq!(list_height(2), 4);
    }

    #[test]
    fn test_list_field_shows_labels_and_title() {
        let draft = Draft::initial();
        let screen = rendered(60, 4, |frame| {
            let area = frame.area();
            draw_list_field(
                frame,
                area,
                ListKind::Personas,
                &draft.personas,
                None,
                false,
            )
        });
        assert!(screen.contains("Personas (Minimum 2)"));
        assert!(screen.contains("Persona 1"));
        assert!(screen.contains("Persona 2"));
        assert!(screen.contains("(empty)"));
    }

    #[test]
    fn test_remove_hint_only_above_minimum() {
        let draft = Draft::initial();
        let at_floor = rendered(60, 4, |frame| {
            let area = frame.area();
            draw_list_field(
                frame,
                area,
                ListKind::Personas,
                &draft.personas,
                Some(0),
                false,
            )
        });
        assert!(!at_floor.contains("remove"));

        let above = rendered(60, 4, |frame| {
            let area = frame.area();
            draw_list_field(
                frame,
                area,
                ListKind::Personas,
                &draft.personas,
                Some(0),
                true,
            )
        });
        assert!(above.contains("remove"));
    }

    #[test]
    fn test_cursor_scroll_follows_last_line() {
        assert_eq!(cursor_scroll("", 20, 4), 0);
        assert_eq!(cursor_scroll("a\nb\nc\nd", 20, 4), 0);
        assert_eq!(cursor_scroll("a\nb\nc\nd\ne\nf", 20, 4), 2);
        // A 25 char line plus cursor wraps onto two rows of 10
        assert_eq!(cursor_scroll(&"x".repeat(25), 10, 1), 2);
    }

    #[test]
    fn test_active_company_info_shows_latest_line() {
        let value = "line 1\nline 2\nline 3\nline 4\nline 5\nline 6";
        let screen = rendered(40, 6, |frame| {
            let area = frame.area();
            draw_field_with_value(frame, area, "Company Info", value, true, true)
        });
        assert!(screen.contains("line 6"));
        assert!(!screen.contains("line 1"));

        let idle = rendered(40, 6, |frame| {
            let area = frame.area();
            draw_field_with_value(frame, area, "Company Info", value, false, true)
        });
        assert!(idle.contains("line 1"));
    }

    #[test]
    fn test_text_field_renders_value() {
        let screen = rendered(40, 3, |frame| {
            let area = frame.area();
            draw_field_with_value(frame, area, "Company Info", "Acme", false, true)
        });
        assert!(screen.contains("Company Info"));
        assert!(screen.contains("Acme"));
    }
}

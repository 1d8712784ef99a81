//! Field rendering utilities for forms

use crate::state::FieldState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn border_color(is_active: bool, has_error: bool) -> Color {
    if has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Draw a text input.
///
/// `badge` is shown right-aligned in the border (email checkmark, age).
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &FieldState,
    is_active: bool,
    badge: Option<Span<'_>>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_active, field.has_error)));
    if let Some(badge) = badge {
        block = block.title(Line::from(vec![Span::raw(" "), badge, Span::raw(" ")]).right_aligned());
    }

    frame.render_widget(content.block(block), area);
}

/// Draw a checkbox on a single row
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    checked: bool,
    is_active: bool,
    has_error: bool,
) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = Style::default().fg(border_color(is_active, has_error));
    let pointer = if is_active { "▶ " } else { "  " };

    let line = Line::from(vec![
        Span::styled(pointer, Style::default().fg(Color::Cyan)),
        Span::styled(mark, style),
        Span::raw(" "),
        Span::styled(label, style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the inline error text below a field
pub fn draw_error_line(frame: &mut Frame, area: Rect, message: &str) {
    if message.is_empty() {
        return;
    }
    let line = Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

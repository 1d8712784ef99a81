//! Registration form rendering

use super::field_renderer::{draw_checkbox, draw_error_line, draw_field};
use crate::app::App;
use crate::document::{FieldId, MessageKind};
use crate::state::{FormButton, FormSnapshot, REGISTRATION_FIELDS};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Badge drawn in the border of a field, if any
fn field_badge<'a>(id: FieldId, snapshot: &'a FormSnapshot) -> Option<Span<'a>> {
    match id {
        FieldId::Email if !snapshot.email_check.is_empty() => Some(Span::styled(
            snapshot.email_check.as_str(),
            Style::default().fg(Color::Green),
        )),
        FieldId::Dob => snapshot.age.map(|age| {
            Span::styled(format!("Age: {age}"), Style::default().fg(Color::Yellow))
        }),
        _ => None,
    }
}

/// Draw the registration form
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.snapshot();
    let form = &app.state.form;

    let mut constraints = Vec::new();
    for spec in REGISTRATION_FIELDS.iter() {
        if spec.id.is_text() {
            constraints.push(Constraint::Length(3)); // Input
        } else {
            constraints.push(Constraint::Length(1)); // Checkbox
        }
        constraints.push(Constraint::Length(1)); // Error line
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Buttons
    constraints.push(Constraint::Length(1)); // Aggregate message
    constraints.push(Constraint::Min(0)); // Remaining space

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Register ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    for (idx, spec) in REGISTRATION_FIELDS.iter().enumerate() {
        let Some(field) = snapshot.field(spec.id) else {
            continue;
        };
        let input_area = chunks[idx * 2];
        let error_area = chunks[idx * 2 + 1];
        let is_active = form.is_active(spec.id);

        if spec.id.is_text() {
            draw_field(
                frame,
                input_area,
                spec.label,
                field,
                is_active,
                field_badge(spec.id, &snapshot),
            );
        } else {
            draw_checkbox(
                frame,
                input_area,
                spec.label,
                snapshot.terms_accepted,
                is_active,
                field.has_error,
            );
        }
        draw_error_line(frame, error_area, &field.error_message);
    }

    let buttons_idx = REGISTRATION_FIELDS.len() * 2;
    draw_buttons(frame, chunks[buttons_idx], app, &snapshot);
    draw_message(frame, chunks[buttons_idx + 1], &snapshot);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App, snapshot: &FormSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Submit
            Constraint::Length(1),  // Gap
            Constraint::Length(11), // Clear
            Constraint::Min(0),
        ])
        .split(area);

    let form = &app.state.form;
    let row_active = form.is_buttons_row_active();

    render_button(
        frame,
        chunks[0],
        FormButton::Submit.label(),
        row_active && form.selected_button == FormButton::Submit,
        snapshot.submit_enabled,
        Some(Color::Green),
    );
    render_button(
        frame,
        chunks[2],
        FormButton::Clear.label(),
        row_active && form.selected_button == FormButton::Clear,
        true,
        Some(Color::Gray),
    );
}

fn draw_message(frame: &mut Frame, area: Rect, snapshot: &FormSnapshot) {
    let Some((text, kind)) = &snapshot.message else {
        return;
    };
    let color = match kind {
        MessageKind::Success => Color::Green,
        MessageKind::Error => Color::Red,
    };
    let line = Line::from(Span::styled(
        text.as_str(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

//! Registration screen rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::{App, BUTTON_ROW};
use crate::state::FieldId;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Maximum width of the form column
const FORM_WIDTH: u16 = 60;

/// Draw the registration form, centered horizontally
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let width = FORM_WIDTH.min(area.width.saturating_sub(2));
    let column = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y,
        width,
        height: area.height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Top padding
            Constraint::Length(1),             // Title
            Constraint::Length(1),             // Subtitle
            Constraint::Length(1),             // Spacing
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(FIELD_HEIGHT),  // Confirm password
            Constraint::Length(1),             // Spacing
            Constraint::Length(BUTTON_HEIGHT), // Submit button
            Constraint::Min(0),
        ])
        .split(column);

    let accent = app.config.accent();

    let title = Paragraph::new(Line::from(Span::styled(
        "Create Account",
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "Fill in your details to sign up",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[2]);

    for (i, id) in FieldId::ALL.into_iter().enumerate() {
        let field = app.form.field(id);
        draw_field(
            frame,
            chunks[4 + i],
            id.label(),
            &app.display_value(id),
            field.error,
            app.focus == i,
            accent,
        );
    }

    let label = if app.form.submitting {
        "Creating account…"
    } else {
        "Create Account"
    };
    render_button(
        frame,
        chunks[9],
        label,
        app.focus == BUTTON_ROW,
        app.form.can_submit(),
        accent,
    );
}

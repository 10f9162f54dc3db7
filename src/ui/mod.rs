//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Reserve the bottom line for the status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Form content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    form::draw(frame, chunks[0], app);
    draw_status_bar(frame, app);
}

/// Draw the status bar: key hints plus submit feedback
fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let hints = format!(
        " Tab:next  {}:submit  {}:show/hide  Esc:quit",
        crate::platform::SUBMIT_SHORTCUT,
        crate::platform::REVEAL_SHORTCUT,
    );

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::Gray))];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

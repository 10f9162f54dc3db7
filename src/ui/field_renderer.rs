//! Field rendering for the registration form

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows per field: three for the bordered box, one for the error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a single-line field box with its inline error underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    error: Option<&str>,
    is_active: bool,
    accent: Color,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Field box
            Constraint::Length(1), // Error line
        ])
        .split(area);

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let style = if is_active {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(accent)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), chunks[0]);

    if let Some(message) = error {
        let line = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, chunks[1]);
    }
}

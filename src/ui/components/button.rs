//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
    accent: Color,
) {
    let border_style = if is_selected && is_enabled {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected && is_enabled {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

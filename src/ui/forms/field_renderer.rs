//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a single-line field takes (borders + content)
pub const SINGLE_LINE_HEIGHT: u16 = 3;

/// Rows a multiline field takes
pub const MULTILINE_HEIGHT: u16 = 5;

/// Height to reserve for a field
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline {
        MULTILINE_HEIGHT
    } else {
        SINGLE_LINE_HEIGHT
    }
}

/// Draw a form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = field
            .as_text()
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        // Keep the line being typed in view
        let visible = usize::from(MULTILINE_HEIGHT - 2);
        let skip = lines.len().saturating_sub(visible);
        Paragraph::new(lines.split_off(skip))
    } else {
        Paragraph::new(Line::from(vec![Span::styled(field.as_text(), style), cursor]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

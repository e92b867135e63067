//! Home page

use crate::app::App;
use crate::state::Page;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the landing page with links to the form pages
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            app.page.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Apply for admission or send the school a message."),
        Line::from(""),
    ];

    for (idx, page) in Page::ALL.iter().enumerate().skip(1) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  F{}  ", idx + 1),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(page.title()),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

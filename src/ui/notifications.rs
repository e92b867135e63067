//! Notification stack drawn over the top-right corner

use crate::notify::{Notification, Severity};
use crate::state::HEADER_HEIGHT;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Widest a notification gets
const MAX_WIDTH: u16 = 44;

/// Margin from the right edge of the screen
const RIGHT_MARGIN: u16 = 1;

/// Borders plus one line of text
const MIN_HEIGHT: u16 = 3;

/// Background and text colors for a severity
pub fn palette(severity: Severity) -> (Color, Color) {
    match severity {
        Severity::Success => (Color::Rgb(0x28, 0xa7, 0x45), Color::White),
        Severity::Error => (Color::Rgb(0xdc, 0x35, 0x45), Color::White),
        Severity::Warning => (Color::Rgb(0xff, 0xc1, 0x07), Color::Black),
    }
}

/// Draw notifications oldest first, stacked downwards below the header
pub fn draw_notifications(frame: &mut Frame, notifications: &[Notification]) {
    let area = frame.area();
    let width = MAX_WIDTH.min(area.width.saturating_sub(RIGHT_MARGIN));
    if width < 6 {
        return;
    }

    let mut y = area.y.saturating_add(HEADER_HEIGHT);
    for notification in notifications {
        // A toast taller than the rows left is cut off at the bottom of the screen
        let rows_left = area.bottom().saturating_sub(y);
        if rows_left < MIN_HEIGHT {
            break;
        }
        let paragraph = toast_text(notification);
        let height = toast_height(&paragraph, width, rows_left);

        let rest_x = area.right() - RIGHT_MARGIN - width;
        let toast_area = slide_in_area(
            Rect::new(rest_x, y, width, height),
            area.right(),
            notification.slide_in_progress(),
        );
        draw_toast(frame, toast_area, paragraph, notification.severity);
        y = y.saturating_add(height);
    }
}

/// Shift a toast right of its resting place by the unfinished part of the slide
fn slide_in_area(rest: Rect, screen_right: u16, progress: f32) -> Rect {
    let remaining = (1.0 - progress.clamp(0.0, 1.0)) * f32::from(rest.width);
    let x = rest.x.saturating_add(remaining.round() as u16);
    let width = rest.width.min(screen_right.saturating_sub(x));
    Rect { x, width, ..rest }
}

/// Toast body, word-wrapped, without its border
fn toast_text(notification: &Notification) -> Paragraph<'static> {
    let (background, foreground) = palette(notification.severity);
    Paragraph::new(format!(" {} ", notification.content))
        .style(
            Style::default()
                .bg(background)
                .fg(foreground)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true })
}

/// Rows the wrapped body needs plus borders, at most `max_rows`
fn toast_height(paragraph: &Paragraph, width: u16, max_rows: u16) -> u16 {
    let rows = paragraph
        .line_count(width.saturating_sub(2))
        .max(1)
        .saturating_add(2);
    u16::try_from(rows).unwrap_or(u16::MAX).min(max_rows)
}

fn draw_toast(frame: &mut Frame, area: Rect, paragraph: Paragraph, severity: Severity) {
    if area.width == 0 {
        return;
    }
    let (background, foreground) = palette(severity);
    let style = Style::default().bg(background).fg(foreground);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .style(style);
    frame.render_widget(paragraph.block(block), area);
}

//! Layout components (header, sidebar, status bar)

use crate::app::App;
use crate::platform::SUBMIT_HINT;
use crate::state::{Page, HEADER_HEIGHT, MENU_TOGGLE_WIDTH};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Site title shown in the header
const SITE_TITLE: &str = "School Portal";

/// Screen regions for one frame
pub struct Regions {
    pub header: Rect,
    /// `None` while the sidebar is collapsed
    pub sidebar: Option<Rect>,
    pub main: Rect,
    pub status: Rect,
}

/// Split the screen into header, optional sidebar, page content and status bar
pub fn create_layout(area: Rect, sidebar_columns: u16) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Body
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    if sidebar_columns == 0 {
        return Regions {
            header: rows[0],
            sidebar: None,
            main: rows[1],
            status: rows[2],
        };
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_columns), // Sidebar
            Constraint::Min(0),                  // Page content
        ])
        .split(rows[1]);

    Regions {
        header: rows[0],
        sidebar: Some(body[0]),
        main: body[1],
        status: rows[2],
    }
}

/// Draw the header with the menu toggle and site title
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let toggle_style = if app.sidebar.is_collapsed() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(MENU_TOGGLE_WIDTH), Constraint::Min(0)])
        .split(area);

    let toggle = Paragraph::new(" ☰ ").style(toggle_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(toggle_style),
    );
    frame.render_widget(toggle, chunks[0]);

    let title = Line::from(vec![
        Span::styled(
            format!(" {SITE_TITLE} "),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("› {}", app.page.label()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, chunks[1]);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        Span::raw(" "),
        Span::styled(
            get_page_hints(app.page),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(" | "),
        Span::styled(app.api_base_url(), Style::default().fg(Color::Blue)),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current page
fn get_page_hints(page: Page) -> String {
    match page {
        Page::Home => "F1-F3:pages  ^B:menu".to_string(),
        Page::Admissions | Page::Contact => {
            format!("Tab:next  S-Tab:prev  {SUBMIT_HINT}  F1-F3:pages  ^B:menu")
        }
    }
}

//! Sidebar drawing functions

use crate::app::App;
use crate::state::Page;
use crate::ui::components::{render_sidebar_button, BUTTON_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the navigation buttons and the resize handle on the right edge
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    if area.width < 2 {
        return;
    }

    // Rightmost column is the resize handle
    let buttons_area = Rect {
        width: area.width - 1,
        ..area
    };
    let handle_area = Rect {
        x: area.right() - 1,
        width: 1,
        ..area
    };

    for (idx, page) in Page::ALL.iter().enumerate() {
        let y = buttons_area.y + idx as u16 * BUTTON_HEIGHT;
        if y + BUTTON_HEIGHT > buttons_area.bottom() {
            break;
        }
        let button_area = Rect {
            y,
            height: BUTTON_HEIGHT,
            ..buttons_area
        };
        render_sidebar_button(
            frame,
            button_area,
            &format!("F{}", idx + 1),
            page.label(),
            *page == app.page,
        );
    }

    let handle_style = if app.sidebar.is_resizing() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(handle_style),
        handle_area,
    );
}

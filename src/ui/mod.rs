//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod notifications;
mod sidebar;

pub use components::BUTTON_HEIGHT;

use crate::app::App;
use crate::state::lock_form;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = layout::create_layout(frame.area(), app.sidebar_columns());

    layout::draw_header(frame, regions.header, app);

    if let Some(sidebar_area) = regions.sidebar {
        sidebar::draw_sidebar(frame, sidebar_area, app);
    }

    match &app.form {
        Some(form) => {
            let form = lock_form(form);
            forms::draw_form(frame, regions.main, app.page.title(), &form);
        }
        None => home::draw(frame, regions.main, app),
    }

    layout::draw_status_bar(frame, regions.status, app);

    // Notifications draw over everything else
    notifications::draw_notifications(frame, &app.notifier.active());
}

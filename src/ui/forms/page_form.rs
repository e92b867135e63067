//! Admission and contact form pages

use super::field_renderer::{draw_field, field_height};
use crate::state::{Form, FormElement, FormModel};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw a form: a window of fields around the focused one, then the submit row
pub fn draw_form(frame: &mut Frame, area: Rect, title: &str, form: &FormModel) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let heights: Vec<u16> = form.fields().iter().map(field_height).collect();
    let available = inner.height.saturating_sub(BUTTON_HEIGHT);
    let first = first_visible_field(&heights, form.active_field(), available);

    let mut y = inner.y;
    for (idx, field) in form.fields().iter().enumerate().skip(first) {
        let height = heights[idx];
        if y + height > inner.y + available {
            break;
        }
        let field_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height,
        };
        draw_field(frame, field_area, field, idx == form.active_field());
        y += height;
    }

    if inner.height >= BUTTON_HEIGHT {
        let control = form.submit_control();
        let width = (control.label().chars().count() as u16 + 4).min(inner.width);
        let button_area = Rect {
            x: inner.x,
            y: inner.bottom() - BUTTON_HEIGHT,
            width,
            height: BUTTON_HEIGHT,
        };
        render_button(
            frame,
            button_area,
            control.label(),
            form.is_submit_row_active(),
            control.is_enabled(),
        );
    }
}

/// Index of the first field to draw so that the active one fits in `available` rows
fn first_visible_field(heights: &[u16], active: usize, available: u16) -> usize {
    // The submit row scrolls like the last field
    let target = active.min(heights.len().saturating_sub(1));
    let mut first = 0;
    while first < target {
        let used: u16 = heights[first..=target].iter().sum();
        if used <= available {
            break;
        }
        first += 1;
    }
    first
}

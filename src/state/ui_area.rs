//! UI area positioning for mouse event handling
//!
//! This module provides a centralized way to calculate offsets for the
//! different UI areas and to convert between terminal cells and the pixel
//! widths the sidebar is measured in.

/// Height of the header bar (with borders: top + content + bottom)
pub const HEADER_HEIGHT: u16 = 3;

/// Width of the menu toggle at the left of the header
pub const MENU_TOGGLE_WIDTH: u16 = 5;

/// Nominal width of one terminal cell in pixels
pub const CELL_WIDTH_PX: u16 = 8;

/// UI area for calculating mouse Y offset
///
/// # Layout
///
/// ```text
/// Row 0-2:  Header (menu toggle + site title)
/// Row 3+:   Sidebar on left (resizable), page content on right
/// Bottom:   Status bar (1 row)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    /// Header itself (rows 0-2)
    Header,
    /// Sidebar navigation (starts after header)
    Sidebar,
}

impl UiArea {
    /// Get the starting Y row for this UI area (absolute screen position)
    #[inline]
    pub const fn start_y(self) -> u16 {
        match self {
            UiArea::Header => 0,
            UiArea::Sidebar => HEADER_HEIGHT,
        }
    }

    /// Convert absolute mouse row to row relative to this UI area
    #[inline]
    pub fn relative_row(self, mouse_row: u16) -> u16 {
        mouse_row.saturating_sub(self.start_y())
    }

    /// Check if a mouse row is within this UI area (at or after start)
    #[inline]
    pub fn contains_row(self, mouse_row: u16) -> bool {
        mouse_row >= self.start_y()
    }
}

/// Pixel position of the right edge of a terminal column
#[inline]
pub fn column_to_px(column: u16) -> u16 {
    column.saturating_add(1).saturating_mul(CELL_WIDTH_PX)
}

/// Number of whole columns needed to show a pixel width
#[inline]
pub fn px_to_columns(px: u16) -> u16 {
    px.div_ceil(CELL_WIDTH_PX)
}

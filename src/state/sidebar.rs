//! Side navigation panel: collapse toggle and drag-to-resize
//!
//! Widths are in pixels. The host converts pointer columns with
//! [`column_to_px`](super::ui_area::column_to_px).

/// The panel never renders narrower than this
pub const MIN_SIDEBAR_WIDTH: u16 = 54;

/// Width used when no width is configured
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 200;

/// Where a click landed, relative to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the panel; does not reach the page-wide handler
    Sidebar,
    /// The menu toggle button; does not reach the page-wide handler
    MenuToggle,
    /// Anywhere else on the page
    Elsewhere,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    collapsed: bool,
    /// Measured from the left edge of the screen, where the panel sits
    width: u16,
    /// Drag tracking is attached between `begin_resize` and `end_resize`
    resizing: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(DEFAULT_SIDEBAR_WIDTH)
    }
}

impl SidebarState {
    pub fn new(width: u16) -> Self {
        Self {
            collapsed: false,
            width: width.max(MIN_SIDEBAR_WIDTH),
            resizing: false,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Route a click; only clicks outside the panel and toggle collapse it
    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::MenuToggle => self.toggle(),
            ClickTarget::Sidebar => {}
            ClickTarget::Elsewhere => self.collapsed = true,
        }
    }

    /// Start tracking the pointer (pointer pressed on the resize handle)
    pub fn begin_resize(&mut self) {
        if !self.collapsed {
            self.resizing = true;
        }
    }

    /// Resize to follow the pointer. Returns false when no drag is active.
    pub fn track_pointer(&mut self, pointer_x: u16) -> bool {
        if !self.resizing {
            return false;
        }
        self.width = pointer_x.max(MIN_SIDEBAR_WIDTH);
        true
    }

    /// Stop tracking the pointer (pointer released)
    pub fn end_resize(&mut self) {
        self.resizing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_expanded_at_default_width() {
        let sidebar = SidebarState::default();
        assert!(!sidebar.is_collapsed());
        assert_eq!(sidebar.width(), DEFAULT_SIDEBAR_WIDTH);
        assert!(!sidebar.is_resizing());
    }

    #[test]
    fn test_new_clamps_configured_width() {
        assert_eq!(SidebarState::new(10).width(), MIN_SIDEBAR_WIDTH);
    }

    #[test]
    fn test_toggle_flips() {
        let mut sidebar = SidebarState::default();
        sidebar.toggle();
        assert!(sidebar.is_collapsed());
        sidebar.toggle();
        assert!(!sidebar.is_collapsed());
    }

    #[test]
    fn test_click_inside_does_not_collapse() {
        let mut sidebar = SidebarState::default();
        sidebar.handle_click(ClickTarget::Sidebar);
        assert!(!sidebar.is_collapsed());
    }

    #[test]
    fn test_click_on_toggle_only_toggles() {
        let mut sidebar = SidebarState::default();
        sidebar.handle_click(ClickTarget::MenuToggle);
        assert!(sidebar.is_collapsed());
        sidebar.handle_click(ClickTarget::MenuToggle);
        assert!(!sidebar.is_collapsed());
    }

    #[test]
    fn test_click_elsewhere_collapses() {
        let mut sidebar = SidebarState::default();
        sidebar.handle_click(ClickTarget::Elsewhere);
        assert!(sidebar.is_collapsed());
        sidebar.handle_click(ClickTarget::Elsewhere);
        assert!(sidebar.is_collapsed());
    }

    #[test]
    fn test_drag_resizes_live() {
        let mut sidebar = SidebarState::default();
        sidebar.begin_resize();
        assert!(sidebar.track_pointer(320));
        assert_eq!(sidebar.width(), 320);
        assert!(sidebar.track_pointer(150));
        assert_eq!(sidebar.width(), 150);
    }

    #[test]
    fn test_drag_clamps_to_minimum() {
        let mut sidebar = SidebarState::default();
        sidebar.begin_resize();
        sidebar.track_pointer(20);
        assert_eq!(sidebar.width(), 54);
        sidebar.track_pointer(0);
        assert_eq!(sidebar.width(), 54);
    }

    #[test]
    fn test_release_detaches_tracking() {
        let mut sidebar = SidebarState::default();
        sidebar.begin_resize();
        sidebar.track_pointer(300);
        sidebar.end_resize();

        assert!(!sidebar.track_pointer(500));
        assert_eq!(sidebar.width(), 300);
    }

    #[test]
    fn test_movement_without_press_is_ignored() {
        let mut sidebar = SidebarState::default();
        assert!(!sidebar.track_pointer(400));
        assert_eq!(sidebar.width(), DEFAULT_SIDEBAR_WIDTH);
    }

    #[test]
    fn test_collapsed_panel_cannot_be_resized() {
        let mut sidebar = SidebarState::default();
        sidebar.toggle();
        sidebar.begin_resize();
        assert!(!sidebar.is_resizing());
    }
}

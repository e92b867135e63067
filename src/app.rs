//! Application state and core logic

use crate::api::ApiClient;
use crate::config::PortalConfig;
use crate::notify::{Notifier, Notify, Severity};
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{
    column_to_px, lock_form, px_to_columns, ClickTarget, Form, FormModel, Page, SidebarState,
    UiArea, HEADER_HEIGHT, MENU_TOGGLE_WIDTH,
};
use crate::submission::{
    wire_page, FormKind, PageBindings, PageElements, SubmissionResult,
};
use crate::ui::BUTTON_HEIGHT;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

/// Columns always left for page content when the sidebar is wide
const MIN_CONTENT_WIDTH: u16 = 20;

/// Main application struct
pub struct App {
    /// Page currently loaded
    pub page: Page,
    /// Side navigation panel
    pub sidebar: SidebarState,
    /// On-screen notification stack
    pub notifier: Arc<Notifier>,
    /// Form on the current page, if it has one
    pub form: Option<Arc<Mutex<FormModel>>>,
    /// Submissions API client
    api: Arc<ApiClient>,
    /// Controllers attached to the current page
    bindings: PageBindings<ApiClient, Notifier, FormModel>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for layout calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &PortalConfig) -> Result<Self> {
        let api = ApiClient::new(config.api_base_url(), config.request_timeout())?;
        tracing::info!("Using submissions API at {}", api.base_url());

        let mut app = Self {
            page: Page::Home,
            sidebar: SidebarState::new(config.sidebar_width()),
            notifier: Arc::new(Notifier::new()),
            form: None,
            api: Arc::new(api),
            bindings: PageBindings::default(),
            quit: false,
            terminal_size: None,
        };
        app.load_page(Page::Home);
        Ok(app)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn api_base_url(&self) -> &str {
        self.api.base_url()
    }

    /// Load a page: build its form and attach the matching controller
    pub fn load_page(&mut self, page: Page) {
        tracing::debug!("Loading page {page:?}");
        self.page = page;

        let mut elements = PageElements::default();
        self.form = match page {
            Page::Home => None,
            Page::Admissions => {
                let form = Arc::new(Mutex::new(FormModel::admission()));
                elements.admission_form = Some(Arc::clone(&form));
                Some(form)
            }
            Page::Contact => {
                let form = Arc::new(Mutex::new(FormModel::contact()));
                elements.contact_form = Some(Arc::clone(&form));
                Some(form)
            }
        };

        self.bindings = match wire_page(page, elements, &self.api, &self.notifier) {
            Ok(bindings) => bindings,
            Err(err) => {
                tracing::warn!("Form handler not attached: {err}");
                self.notifier
                    .notify(&format!("Form unavailable: {err}"), Severity::Warning);
                PageBindings::default()
            }
        };
    }

    /// Submit the current page's form through its controller
    pub fn submit_form(&self) -> Option<JoinHandle<SubmissionResult>> {
        let kind = match self.page {
            Page::Home => return None,
            Page::Admissions => FormKind::Admission,
            Page::Contact => FormKind::Contact,
        };
        let controller = self.bindings.controller(kind)?;
        controller.on_submit(&mut crate::state::SubmitEvent::new())
    }

    /// Sidebar width in columns (0 when collapsed)
    pub fn sidebar_columns(&self) -> u16 {
        if self.sidebar.is_collapsed() {
            return 0;
        }
        let columns = px_to_columns(self.sidebar.width());
        match self.terminal_size {
            Some((_, width)) => columns.min(width.saturating_sub(MIN_CONTENT_WIDTH)),
            None => columns,
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.sidebar.toggle();
                return;
            }
            KeyCode::Esc => {
                // Dismiss the newest notification
                if let Some(newest) = self.notifier.active().last() {
                    self.notifier.dismiss(newest.id);
                }
                return;
            }
            KeyCode::F(n @ 1..=3) => {
                if let Some(page) = Page::from_index(usize::from(n) - 1) {
                    self.load_page(page);
                }
                return;
            }
            _ => {}
        }

        if self.form.is_some() {
            self.handle_form_key(key);
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.clone() else {
            return;
        };

        let submit_pressed = match key.code {
            // Ctrl+S everywhere, Cmd+S as well on macOS
            KeyCode::Char('s')
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | SUBMIT_MODIFIER) =>
            {
                true
            }
            KeyCode::Enter => {
                let mut form = lock_form(&form);
                if form.is_submit_row_active() || !form.is_active_field_multiline() {
                    true
                } else {
                    if let Some(field) = form.get_active_field_mut() {
                        field.push_char('\n');
                    }
                    false
                }
            }
            KeyCode::Tab => {
                lock_form(&form).next_field();
                false
            }
            KeyCode::BackTab => {
                lock_form(&form).prev_field();
                false
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(field) = lock_form(&form).get_active_field_mut() {
                    field.push_char(c);
                }
                false
            }
            KeyCode::Backspace => {
                if let Some(field) = lock_form(&form).get_active_field_mut() {
                    field.pop_char();
                }
                false
            }
            _ => false,
        };

        if submit_pressed {
            // The request runs on its own; its outcome arrives as a notification
            let _ = self.submit_form();
        }
    }

    /// Work out where a click landed relative to the sidebar
    fn click_target(&self, column: u16, row: u16) -> ClickTarget {
        if row < HEADER_HEIGHT && column < MENU_TOGGLE_WIDTH {
            ClickTarget::MenuToggle
        } else if UiArea::Sidebar.contains_row(row) && column < self.sidebar_columns() {
            ClickTarget::Sidebar
        } else {
            ClickTarget::Elsewhere
        }
    }

    /// Calculate which sidebar item was clicked
    fn calculate_sidebar_item_from_click(&self, mouse_row: u16) -> Option<Page> {
        if !UiArea::Sidebar.contains_row(mouse_row) {
            return None;
        }
        let relative_row = UiArea::Sidebar.relative_row(mouse_row);
        Page::from_index(usize::from(relative_row / BUTTON_HEIGHT))
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let target = self.click_target(mouse.column, mouse.row);
                if target == ClickTarget::Sidebar {
                    let on_handle = mouse.column + 1 == self.sidebar_columns();
                    if on_handle {
                        self.sidebar.begin_resize();
                    } else if let Some(page) = self.calculate_sidebar_item_from_click(mouse.row) {
                        self.load_page(page);
                    }
                }
                self.sidebar.handle_click(target);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.sidebar.track_pointer(column_to_px(mouse.column));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.sidebar.end_resize();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormElement, MIN_SIDEBAR_WIDTH};
    use tokio::net::TcpListener;

    fn test_app() -> App {
        App::new(&PortalConfig {
            api_base_url: Some("http://127.0.0.1:9/api".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn value(app: &App, name: &str) -> Option<String> {
        app.form.as_ref().and_then(|f| lock_form(f).lookup(name))
    }

    mod pages {
        use super::*;

        #[test]
        fn test_starts_on_home_without_form() {
            let app = test_app();
            assert_eq!(app.page, Page::Home);
            assert!(app.form.is_none());
            assert!(app.bindings.is_empty());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_admissions_page_attaches_admission_controller() {
            let mut app = test_app();
            app.load_page(Page::Admissions);
            assert!(app.bindings.admission.is_some());
            assert!(app.bindings.contact.is_none());
            assert_eq!(lock_form(app.form.as_ref().unwrap()).fields().len(), 27);
        }

        #[test]
        fn test_contact_page_attaches_contact_controller() {
            let mut app = test_app();
            app.load_page(Page::Contact);
            assert!(app.bindings.contact.is_some());
            assert!(app.bindings.admission.is_none());
        }

        #[test]
        fn test_reloading_page_gives_fresh_form() {
            let mut app = test_app();
            app.load_page(Page::Contact);
            app.handle_key(key(KeyCode::Char('A')));
            app.load_page(Page::Contact);
            assert_eq!(value(&app, "name").as_deref(), Some(""));
        }

        #[test]
        fn test_function_keys_switch_pages() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::F(2)));
            assert_eq!(app.page, Page::Admissions);
            app.handle_key(key(KeyCode::F(3)));
            assert_eq!(app.page, Page::Contact);
            app.handle_key(key(KeyCode::F(1)));
            assert_eq!(app.page, Page::Home);
        }

        #[test]
        fn test_submit_on_home_does_nothing() {
            let app = test_app();
            assert!(app.submit_form().is_none());
        }

        #[test]
        fn test_request_quit() {
            let mut app = test_app();
            app.request_quit();
            assert!(app.should_quit());
        }
    }

    mod form_keys {
        use super::*;

        #[test]
        fn test_typing_edits_active_field() {
            let mut app = test_app();
            app.load_page(Page::Contact);
            for c in "Ama".chars() {
                app.handle_key(key(KeyCode::Char(c)));
            }
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(value(&app, "name").as_deref(), Some("Am"));
        }

        #[test]
        fn test_tab_moves_to_next_field() {
            let mut app = test_app();
            app.load_page(Page::Contact);
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Char('x')));
            assert_eq!(value(&app, "email").as_deref(), Some("x"));

            app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
            app.handle_key(key(KeyCode::Char('y')));
            assert_eq!(value(&app, "name").as_deref(), Some("y"));
        }

        #[test]
        fn test_enter_in_message_adds_newline() {
            let mut app = test_app();
            app.load_page(Page::Contact);
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Char('a')));
            app.handle_key(key(KeyCode::Enter));
            app.handle_key(key(KeyCode::Char('b')));
            assert_eq!(value(&app, "message").as_deref(), Some("a\nb"));
        }

        #[tokio::test]
        async fn test_esc_dismisses_newest_notification() {
            let mut app = test_app();
            app.notifier.notify("first", Severity::Success);
            app.notifier.notify("second", Severity::Warning);

            app.handle_key(key(KeyCode::Esc));
            let active = app.notifier.active();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].content, "first");
        }

        #[test]
        fn test_ctrl_b_toggles_sidebar() {
            let mut app = test_app();
            app.handle_key(ctrl('b'));
            assert!(app.sidebar.is_collapsed());
            app.handle_key(ctrl('b'));
            assert!(!app.sidebar.is_collapsed());
        }

        #[tokio::test]
        async fn test_failed_submit_shows_one_error_and_keeps_input() {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);

            let mut app = App::new(&PortalConfig {
                api_base_url: Some(format!("http://{addr}/api")),
                ..Default::default()
            })
            .unwrap();
            app.load_page(Page::Contact);
            app.handle_key(key(KeyCode::Char('A')));

            let handle = app.submit_form().unwrap();
            assert!(app.submit_form().is_none());

            let result = handle.await.unwrap();
            assert!(matches!(result, SubmissionResult::Failure(_)));

            let active = app.notifier.active();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].severity, Severity::Error);
            assert!(active[0].content.starts_with("Error: "));
            assert_eq!(value(&app, "name").as_deref(), Some("A"));

            let form = lock_form(app.form.as_ref().unwrap());
            assert!(form.submit_control().is_enabled());
            assert_eq!(form.submit_control().label(), "Send Message");
        }
    }

    mod mouse_events {
        use super::*;

        #[test]
        fn test_menu_toggle_click_toggles() {
            let mut app = test_app();
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
            assert!(app.sidebar.is_collapsed());
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
            assert!(!app.sidebar.is_collapsed());
        }

        #[test]
        fn test_click_inside_sidebar_keeps_it_open() {
            let mut app = test_app();
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 2, 20));
            assert!(!app.sidebar.is_collapsed());
        }

        #[test]
        fn test_click_outside_collapses() {
            let mut app = test_app();
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 60, 10));
            assert!(app.sidebar.is_collapsed());
        }

        #[test]
        fn test_sidebar_item_click_loads_page() {
            let mut app = test_app();
            let row = UiArea::Sidebar.start_y() + BUTTON_HEIGHT + 1;
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 2, row));
            assert_eq!(app.page, Page::Admissions);
            assert!(!app.sidebar.is_collapsed());
        }

        #[test]
        fn test_drag_handle_resizes_and_clamps() {
            let mut app = test_app();
            let handle_column = app.sidebar_columns() - 1;

            app.handle_mouse(mouse(
                MouseEventKind::Down(MouseButton::Left),
                handle_column,
                10,
            ));
            assert!(app.sidebar.is_resizing());

            app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 39, 10));
            assert_eq!(app.sidebar.width(), 320);

            app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 2, 10));
            assert_eq!(app.sidebar.width(), MIN_SIDEBAR_WIDTH);

            app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 2, 10));
            app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 50, 10));
            assert_eq!(app.sidebar.width(), MIN_SIDEBAR_WIDTH);
            assert!(!app.sidebar.is_collapsed());
        }

        #[test]
        fn test_sidebar_columns_leave_room_for_content() {
            let mut app = test_app();
            app.terminal_size = Some((24, 30));
            assert_eq!(app.sidebar_columns(), 10);
            app.sidebar.toggle();
            assert_eq!(app.sidebar_columns(), 0);
        }
    }
}

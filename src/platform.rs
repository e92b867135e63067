//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the submit shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the status bar
/// Ctrl+S works on all platforms (Cmd+S also works on macOS)
#[cfg(target_os = "macos")]
pub const SUBMIT_HINT: &str = "Cmd+S:submit";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_HINT: &str = "^S:submit";

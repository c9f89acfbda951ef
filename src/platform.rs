//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the download shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const DOWNLOAD_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const DOWNLOAD_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Download shortcut display
/// - macOS: "Cmd+D"
/// - Linux/Windows: "Ctrl+D"
/// Ctrl+D is accepted on every platform.
#[cfg(target_os = "macos")]
pub const DOWNLOAD_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const DOWNLOAD_SHORTCUT: &str = "Ctrl+D";

/// Preview shortcut display
pub const VIEW_SHORTCUT: &str = "Ctrl+P";

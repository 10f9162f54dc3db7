//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the reveal-password shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const REVEAL_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const REVEAL_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the status-bar hints
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reveal-password shortcut display
/// - macOS: "Cmd+R"
/// - Linux/Windows: "Ctrl+R"
#[cfg(target_os = "macos")]
pub const REVEAL_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const REVEAL_SHORTCUT: &str = "Ctrl+R";

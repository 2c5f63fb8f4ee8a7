//! Layout dimension constants for TUI rendering.

/// Height of the history pane in lines (two borders + four entries).
pub const HISTORY_PANE_HEIGHT: u16 = 6;

/// Height of the display pane in lines (two borders + pending line + buffer line).
pub const DISPLAY_PANE_HEIGHT: u16 = 4;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 80;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Key hints shown in the status bar when there is no error.
pub const STATUS_HINTS: &str = "Enter = · Esc clear · ↑↓ history · ? help · q quit";

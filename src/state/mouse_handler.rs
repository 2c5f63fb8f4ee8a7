//! Mouse event handler.
//!
//! Pure functions mapping click positions to keypad tokens.

use crate::model::Token;
use crate::state::keypad::button_areas;
use ratatui::layout::{Position, Rect};

/// Detect which keypad button (if any) was clicked.
///
/// # Arguments
/// * `click_x` - Mouse click column position (0-based)
/// * `click_y` - Mouse click row position (0-based)
/// * `keypad_area` - Area the keypad was last rendered into
///
/// # Returns
/// The token of the button under the click, or `None` outside every button.
pub fn detect_keypad_click(click_x: u16, click_y: u16, keypad_area: Rect) -> Option<Token> {
    let position = Position::new(click_x, click_y);
    if !keypad_area.contains(position) {
        return None;
    }

    button_areas(keypad_area)
        .find(|(area, _)| area.contains(position))
        .map(|(_, button)| button.token)
}

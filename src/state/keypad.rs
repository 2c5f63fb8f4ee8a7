//! Keypad geometry shared by the renderer and mouse hit-testing.
//!
//! The keypad is a grid four units wide and five rows tall. Wide buttons
//! span two units.

use crate::model::{Operator, Token};
use ratatui::layout::Rect;

/// Grid width in units.
pub const KEYPAD_COLUMNS: u16 = 4;

/// Grid height in rows.
pub const KEYPAD_ROWS: u16 = 5;

/// One button of the on-screen keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// Token applied when the button is pressed.
    pub token: Token,
    /// Text printed on the button.
    pub label: &'static str,
    /// Grid row, from the top.
    pub row: u16,
    /// Leftmost grid unit.
    pub column: u16,
    /// Width in grid units.
    pub span: u16,
}

const fn button(token: Token, label: &'static str, row: u16, column: u16, span: u16) -> KeypadButton {
    KeypadButton {
        token,
        label,
        row,
        column,
        span,
    }
}

/// Every keypad button, row by row.
pub const KEYPAD: [KeypadButton; 18] = [
    button(Token::Back, "Back", 0, 0, 2),
    button(Token::Clear, "C", 0, 2, 1),
    button(Token::Operator(Operator::Divide), "/", 0, 3, 1),
    button(Token::Digit(7), "7", 1, 0, 1),
    button(Token::Digit(8), "8", 1, 1, 1),
    button(Token::Digit(9), "9", 1, 2, 1),
    button(Token::Operator(Operator::Multiply), "*", 1, 3, 1),
    button(Token::Digit(4), "4", 2, 0, 1),
    button(Token::Digit(5), "5", 2, 1, 1),
    button(Token::Digit(6), "6", 2, 2, 1),
    button(Token::Operator(Operator::Subtract), "-", 2, 3, 1),
    button(Token::Digit(1), "1", 3, 0, 1),
    button(Token::Digit(2), "2", 3, 1, 1),
    button(Token::Digit(3), "3", 3, 2, 1),
    button(Token::Operator(Operator::Add), "+", 3, 3, 1),
    button(Token::Digit(0), "0", 4, 0, 2),
    button(Token::Separator, ":", 4, 2, 1),
    button(Token::Equals, "=", 4, 3, 1),
];

impl KeypadButton {
    /// Whether the button types into the display rather than acting on it.
    pub fn is_entry(&self) -> bool {
        matches!(self.token, Token::Digit(_))
    }

    /// Screen area of this button inside the keypad `area`.
    ///
    /// Units are sized by integer division; leftover columns and rows go to
    /// the last unit so the grid fills the whole area.
    pub fn area(&self, area: Rect) -> Rect {
        let unit_width = area.width / KEYPAD_COLUMNS;
        let unit_height = area.height / KEYPAD_ROWS;

        let x = area.x + self.column * unit_width;
        let y = area.y + self.row * unit_height;
        let width = if self.column + self.span == KEYPAD_COLUMNS {
            area.x + area.width - x
        } else {
            self.span * unit_width
        };
        let height = if self.row + 1 == KEYPAD_ROWS {
            area.y + area.height - y
        } else {
            unit_height
        };

        Rect::new(x, y, width, height)
    }
}

/// Buttons paired with their screen areas.
pub fn button_areas(area: Rect) -> impl Iterator<Item = (Rect, &'static KeypadButton)> {
    KEYPAD.iter().map(move |b| (b.area(area), b))
}

//! Domain-level keyboard actions independent of key bindings.

use crate::model::token::Token;

/// What a key press means to the application.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`crate::config::KeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Feed a token to the calculator engine.
    Input(Token),
    /// Scroll the history pane towards older entries. Default: ↑
    ScrollHistoryUp,
    /// Scroll the history pane towards newer entries. Default: ↓
    ScrollHistoryDown,
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Parse an action name as written in the `[keybindings]` config table.
    ///
    /// Token labels (`"7"`, `"+"`, `"Back"`, ...) map to [`KeyAction::Input`].
    pub fn from_name(name: &str) -> Option<KeyAction> {
        match name {
            "ScrollHistoryUp" => Some(KeyAction::ScrollHistoryUp),
            "ScrollHistoryDown" => Some(KeyAction::ScrollHistoryDown),
            "Help" => Some(KeyAction::Help),
            "Quit" => Some(KeyAction::Quit),
            label => Token::from_label(label).map(KeyAction::Input),
        }
    }

    /// The token carried by an input action.
    pub fn token(self) -> Option<Token> {
        match self {
            KeyAction::Input(token) => Some(token),
            _ => None,
        }
    }
}

//! Keyboard bindings configuration.

use crate::config::loader::ConfigError;
use crate::model::key_action::KeyAction;
use crate::model::{Operator, Token};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

/// Maps keyboard events to domain actions.
///
/// Provides default calculator bindings with option to extend or override
/// them via the `[keybindings]` config table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers are compared. SHIFT is ignored on character
    /// keys because the terminal already delivers the shifted character
    /// (Shift+`=` arrives as `+`, Shift+`;` as `:`).
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&lookup_key(key)).copied()
    }

    /// Decode a key event into a calculator token.
    ///
    /// Returns `None` for unbound keys and for keys bound to UI actions.
    pub fn token_for(&self, key: KeyEvent) -> Option<Token> {
        self.get(key).and_then(KeyAction::token)
    }

    /// Bind a key, replacing any previous binding.
    pub fn insert(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(lookup_key(key), action);
    }

    /// Default bindings extended with `overrides` (key name → action name).
    ///
    /// Key names are single characters or `Enter`, `Esc`, `Backspace`,
    /// `Delete`, `Tab`, `Space`, `Up`, `Down`, `Left`, `Right`, `PageUp`,
    /// `PageDown`, `Home`, `End`, optionally prefixed with `Ctrl+` or `Alt+`.
    /// Action names are token labels or [`KeyAction::from_name`] names.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidKeyBinding`] for an unknown key or action name.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut bindings = Self::default();
        for (key_name, action_name) in overrides {
            let invalid = || ConfigError::InvalidKeyBinding {
                key: key_name.clone(),
                action: action_name.clone(),
            };
            let key = parse_key_name(key_name).ok_or_else(invalid)?;
            let action = KeyAction::from_name(action_name).ok_or_else(invalid)?;
            bindings.insert(key, action);
        }
        Ok(bindings)
    }
}

/// Strip everything but code and modifiers, and SHIFT from character keys.
fn lookup_key(key: KeyEvent) -> KeyEvent {
    let mut modifiers = key.modifiers;
    if matches!(key.code, KeyCode::Char(_)) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(key.code, modifiers)
}

/// Parse a key name from the config file.
pub fn parse_key_name(name: &str) -> Option<KeyEvent> {
    let (modifiers, rest) = if let Some(rest) = name.strip_prefix("Ctrl+") {
        (KeyModifiers::CONTROL, rest)
    } else if let Some(rest) = name.strip_prefix("Alt+") {
        (KeyModifiers::ALT, rest)
    } else {
        (KeyModifiers::NONE, name)
    };

    let code = match rest {
        "Enter" => KeyCode::Enter,
        "Esc" => KeyCode::Esc,
        "Backspace" => KeyCode::Backspace,
        "Delete" => KeyCode::Delete,
        "Tab" => KeyCode::Tab,
        "Space" => KeyCode::Char(' '),
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

static DEFAULT_BINDINGS: LazyLock<KeyBindings> = LazyLock::new(KeyBindings::default);

/// Decode a key event into a calculator token using the default bindings.
///
/// UI keys (history scrolling, help, quit) and unbound keys give `None`.
pub fn key_event_to_token(key: KeyEvent) -> Option<Token> {
    DEFAULT_BINDINGS.token_for(key)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(lookup_key(KeyEvent::new(code, modifiers)), action);
        };

        // Digits (top row and numeric keypad deliver the same characters)
        for digit in 0..=9u8 {
            let c = char::from(b'0' + digit);
            bind(
                KeyCode::Char(c),
                KeyModifiers::NONE,
                KeyAction::Input(Token::Digit(digit)),
            );
        }

        // Separator (Shift+; on most layouts)
        bind(
            KeyCode::Char(':'),
            KeyModifiers::NONE,
            KeyAction::Input(Token::Separator),
        );

        // Operators
        bind(
            KeyCode::Char('+'),
            KeyModifiers::NONE,
            KeyAction::Input(Token::Operator(Operator::Add)),
        );
        bind(
            KeyCode::Char('-'),
            KeyModifiers::NONE,
            KeyAction::Input(Token::Operator(Operator::Subtract)),
        );
        bind(
            KeyCode::Char('*'),
            KeyModifiers::NONE,
            KeyAction::Input(Token::Operator(Operator::Multiply)),
        );
        bind(
            KeyCode::Char('x'),
            KeyModifiers::NONE,
            KeyAction::Input(Token::Operator(Operator::Multiply)),
        );
        bind(
            KeyCode::Char('/'),
            KeyModifiers::NONE,
            KeyAction::Input(Token::Operator(Operator::Divide)),
        );

        // Evaluate
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Input(Token::Equals));
        bind(
            KeyCode::Char('='),
            KeyModifiers::NONE,
            KeyAction::Input(Token::Equals),
        );

        // Editing
        bind(KeyCode::Backspace, KeyModifiers::NONE, KeyAction::Input(Token::Back));
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Input(Token::Clear));
        bind(KeyCode::Delete, KeyModifiers::NONE, KeyAction::Input(Token::Clear));

        // History pane
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollHistoryUp);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollHistoryDown);

        // Application controls
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        Self { bindings }
    }
}

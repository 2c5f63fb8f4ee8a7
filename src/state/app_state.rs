//! Application state and transitions.
//!
//! AppState wraps the calculator engine with the little UI state the
//! terminal shell needs. All transitions are plain methods with no I/O.

use crate::model::{CalcError, KeyAction, Token};
use crate::state::engine::Calculator;

/// Result of dispatching a [`KeyAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// State changed (or stayed the same); keep running.
    Continue,
    /// The engine rejected a token; state is unchanged.
    Rejected(CalcError),
    /// The user asked to exit.
    Quit,
}

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The calculator engine; the only domain state.
    calculator: Calculator,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// Whether the on-screen keypad is drawn.
    pub show_keypad: bool,

    /// History rows scrolled up from the newest entry (0 = newest visible).
    history_scroll: usize,

    /// Message shown in the status bar after a reported engine error.
    status: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create state around a fresh calculator.
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
            help_visible: false,
            show_keypad: true,
            history_scroll: 0,
            status: None,
        }
    }

    /// The calculator engine.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Feed one token to the engine.
    ///
    /// A reported error is kept for the status bar until the next token;
    /// silent errors clear it like a success does. When history grows the
    /// view jumps back to the newest entry.
    pub fn input(&mut self, token: Token) -> Result<(), CalcError> {
        let history_len = self.calculator.history().len();
        let result = self.calculator.apply(token);

        self.status = match &result {
            Err(err) if !err.is_silent() => Some(err.to_string()),
            _ => None,
        };
        if self.calculator.history().len() != history_len {
            self.history_scroll = 0;
        }

        result
    }

    /// Dispatch a key action.
    pub fn handle_action(&mut self, action: KeyAction) -> ActionOutcome {
        match action {
            KeyAction::Input(token) => match self.input(token) {
                Ok(()) => ActionOutcome::Continue,
                Err(err) => ActionOutcome::Rejected(err),
            },
            KeyAction::ScrollHistoryUp => {
                self.scroll_history_up();
                ActionOutcome::Continue
            }
            KeyAction::ScrollHistoryDown => {
                self.scroll_history_down();
                ActionOutcome::Continue
            }
            KeyAction::Help => {
                self.help_visible = !self.help_visible;
                ActionOutcome::Continue
            }
            KeyAction::Quit => ActionOutcome::Quit,
        }
    }

    /// Scroll one entry towards older history. Stops at the oldest entry.
    pub fn scroll_history_up(&mut self) {
        let max = self.calculator.history().len().saturating_sub(1);
        self.history_scroll = (self.history_scroll + 1).min(max);
    }

    /// Scroll one entry towards newer history. Stops at the newest entry.
    pub fn scroll_history_down(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }

    /// History rows scrolled up from the newest entry.
    pub fn history_scroll(&self) -> usize {
        self.history_scroll
    }

    /// Status bar message, if an error was just reported.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

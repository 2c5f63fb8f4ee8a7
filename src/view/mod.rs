//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod keypad;
mod layout;
mod styles;

pub use help::render_help_overlay;
pub use keypad::KeypadWidget;
pub use layout::{calculate_areas, fit_right, render_layout, visible_history, ScreenAreas};
pub use styles::{CalcStyles, ColorConfig, ACTION_COLOR};

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::{detect_keypad_click, ActionOutcome, AppState};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Settings the TUI starts with, resolved from config, env and CLI.
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Key bindings, defaults plus config overrides.
    pub key_bindings: KeyBindings,
    /// Whether to draw with colors.
    pub color: ColorConfig,
    /// Whether to draw the on-screen keypad.
    pub show_keypad: bool,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            key_bindings: KeyBindings::default(),
            color: ColorConfig::default(),
            show_keypad: true,
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: CalcStyles,
    /// Keypad area from the last draw (for mouse click detection)
    last_keypad_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(options: TuiOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, options))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on input; nothing
    /// changes on screen without an event.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                // Windows reports both press and release
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(terminal: Terminal<B>, options: TuiOptions) -> Self {
        let mut app_state = AppState::new();
        app_state.show_keypad = options.show_keypad;

        Self {
            terminal,
            app_state,
            key_bindings: options.key_bindings,
            styles: CalcStyles::with_color_config(options.color),
            last_keypad_area: None,
        }
    }

    /// Handle a key press. Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if rebound
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Esc closes the help overlay instead of clearing the calculator
        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        self.dispatch(action)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(keypad_area) = self.last_keypad_area else {
            return;
        };

        if let Some(token) = detect_keypad_click(mouse.column, mouse.row, keypad_area) {
            debug!(%token, "Keypad click");
            self.dispatch(KeyAction::Input(token));
        }
    }

    fn dispatch(&mut self, action: KeyAction) -> bool {
        match self.app_state.handle_action(action) {
            ActionOutcome::Continue => {
                if let Some(token) = action.token() {
                    let buffer = self.app_state.calculator().display();
                    debug!(%token, display = buffer, "Applied token");
                }
                false
            }
            ActionOutcome::Rejected(err) if err.is_silent() => {
                debug!(error = %err, "Ignored token");
                false
            }
            ActionOutcome::Rejected(err) => {
                warn!(error = %err, "Calculation rejected");
                false
            }
            ActionOutcome::Quit => {
                info!("Quit requested");
                true
            }
        }
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        // Keypad area is computed ahead of the frame so clicks hit what is drawn
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        self.last_keypad_area = calculate_areas(frame_area, self.app_state.show_keypad).keypad;

        self.terminal.draw(|frame| {
            render_layout(frame, &self.app_state, &self.styles);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// Only for tests within the crate. DO NOT use these in production code.

#[cfg(test)]
#[allow(dead_code)] // Not every helper is used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp around an existing terminal (test-only constructor)
    pub(crate) fn new_for_test(terminal: Terminal<B>, options: TuiOptions) -> Self {
        Self::with_terminal(terminal, options)
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event. Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Render a single frame to the backend (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal for buffer inspection (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Run the interactive calculator until the user quits.
///
/// The terminal is restored even when the event loop fails.
pub fn run_with_options(options: TuiOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(options)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal mode
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn create_test_app() -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
        TuiApp::new_for_test(terminal, TuiOptions::default())
    }

    fn press(app: &mut TuiApp<TestBackend>, c: char) -> bool {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app();
        assert!(press(&mut app, 'q'), "'q' should trigger quit");
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(key), "Ctrl+C should trigger quit");
    }

    #[test]
    fn unbound_key_is_ignored() {
        let mut app = create_test_app();
        assert!(!press(&mut app, 'a'));
        assert_eq!(app.app_state().calculator().display(), "");
    }

    #[test]
    fn typed_digits_reach_display() {
        let mut app = create_test_app();
        for c in "2:45".chars() {
            assert!(!press(&mut app, c));
        }
        assert_eq!(app.app_state().calculator().display(), "2:45");
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn applied_token_logs_current_display() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut app = create_test_app();
        tracing::subscriber::with_default(subscriber, || {
            for c in "1:3".chars() {
                press(&mut app, c);
            }
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Applied token"), "{}", output);
        assert!(output.contains("display=\"1:3\""), "{}", output);
    }

    #[test]
    fn esc_closes_help_before_clearing() {
        let mut app = create_test_app();
        press(&mut app, '7');
        press(&mut app, '?');
        assert!(app.app_state().help_visible);

        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!app.app_state().help_visible);
        assert_eq!(app.app_state().calculator().display(), "7");

        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.app_state().calculator().display(), "");
    }

    #[test]
    fn divide_by_zero_shows_status() {
        let mut app = create_test_app();
        for c in "3/0".chars() {
            press(&mut app, c);
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.app_state().status(), Some("Cannot divide by zero"));
        assert_eq!(app.app_state().calculator().display(), "0");
    }

    #[test]
    fn rebound_key_dispatches_new_action() {
        let mut bindings = KeyBindings::default();
        bindings.insert(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            KeyAction::Help,
        );
        let terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
        let mut app = TuiApp::new_for_test(
            terminal,
            TuiOptions {
                key_bindings: bindings,
                ..TuiOptions::default()
            },
        );

        press(&mut app, 'h');
        assert!(app.app_state().help_visible);
    }

    #[test]
    fn click_before_first_draw_is_ignored() {
        let mut app = create_test_app();
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 20,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.app_state().calculator().display(), "");
    }

    #[test]
    fn draw_records_keypad_area() {
        let mut app = create_test_app();
        app.draw().unwrap();
        assert_eq!(app.last_keypad_area, Some(Rect::new(0, 10, 40, 19)));
    }

    #[test]
    fn draw_without_keypad_records_none() {
        let terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
        let mut app = TuiApp::new_for_test(
            terminal,
            TuiOptions {
                show_keypad: false,
                ..TuiOptions::default()
            },
        );
        app.draw().unwrap();
        assert_eq!(app.last_keypad_area, None);
    }
}

//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with methods for simulating key presses and
//! keypad clicks, and for reading back what was drawn.

use crate::model::Token;
use crate::state::{button_areas, AppState};
use crate::view::{calculate_areas, TuiApp, TuiError, TuiOptions};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Empty trailing lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    width: u16,
    height: u16,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Fresh calculator in a 40x30 terminal with default options.
    pub fn new() -> Result<Self, TuiError> {
        Self::with_options(40, 30, TuiOptions::default())
    }

    /// Fresh calculator with a custom terminal size and options.
    pub fn with_options(width: u16, height: u16, options: TuiOptions) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let app = TuiApp::new_for_test(terminal, options);

        Ok(Self {
            app,
            width,
            height,
            running: true,
        })
    }

    /// Send a single key event. Returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C). Returns true if the app quit.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Type text (sends individual character key events)
    ///
    /// Stops early if a key quits the app.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Send a left click at the given cell.
    ///
    /// Renders first so the keypad area is known, like a real click always
    /// follows at least one draw.
    pub fn click_at(&mut self, column: u16, row: u16) {
        if !self.running {
            return;
        }

        let _ = self.app.render_test();

        self.app.handle_mouse_test(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Click the centre of the keypad button carrying `token`.
    ///
    /// # Panics
    /// Panics if the keypad is hidden or has no such button
    pub fn click_button(&mut self, token: Token) {
        let (x, y) = self
            .button_center(token)
            .unwrap_or_else(|| panic!("no keypad button for {}", token));
        self.click_at(x, y);
    }

    /// Centre cell of the button for `token`, if the keypad is shown.
    pub fn button_center(&self, token: Token) -> Option<(u16, u16)> {
        let frame = Rect::new(0, 0, self.width, self.height);
        let keypad = calculate_areas(frame, self.state().show_keypad).keypad?;
        button_areas(keypad)
            .find(|(_, button)| button.token == token)
            .map(|(area, _)| (area.x + area.width / 2, area.y + area.height / 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harness_starts_running_with_empty_display() {
        let harness = AcceptanceTestHarness::new().unwrap();
        assert!(harness.is_running());
        assert_eq!(harness.state().calculator().display(), "");
    }

    #[test]
    fn keys_after_quit_are_ignored() {
        let mut harness = AcceptanceTestHarness::new().unwrap();
        harness.type_text("1q2");
        assert!(!harness.is_running());
        assert_eq!(harness.state().calculator().display(), "1");
    }

    #[test]
    fn buffer_to_string_drops_trailing_blank_lines() {
        let mut buffer = ratatui::buffer::Buffer::empty(Rect::new(0, 0, 4, 3));
        buffer.set_string(0, 0, "ab", ratatui::style::Style::default());
        assert_eq!(buffer_to_string(&buffer), "ab");
    }
}

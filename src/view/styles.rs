//! Color and text styles for the calculator UI.

use ratatui::style::{Color, Modifier, Style};

/// Orange used for operator and action buttons.
pub const ACTION_COLOR: Color = Color::Rgb(0xff, 0x99, 0x00);

// ===== ColorConfig =====

/// Whether colors are enabled.
///
/// Resolved from the `color` config key, `NO_COLOR`, and `--no-color`
/// before the UI starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved setting.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== CalcStyles =====

/// Styles for every part of the calculator screen.
///
/// With colors disabled only modifiers (bold, dim, reversed) remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcStyles {
    /// Digit buttons.
    pub entry_button: Style,
    /// Operator, `=`, `:`, `C` and `Back` buttons.
    pub action_button: Style,
    /// The display buffer.
    pub display: Style,
    /// Left operand and operator above the display.
    pub pending: Style,
    /// History lines.
    pub history: Style,
    /// Pane borders.
    pub border: Style,
    /// Status bar error message.
    pub error: Style,
    /// Status bar key hints.
    pub hint: Style,
}

impl CalcStyles {
    /// Create styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if !config.colors_enabled() {
            return Self {
                entry_button: Style::default(),
                action_button: Style::default().add_modifier(Modifier::BOLD),
                display: Style::default().add_modifier(Modifier::BOLD),
                pending: Style::default(),
                history: Style::default(),
                border: Style::default(),
                error: Style::default().add_modifier(Modifier::REVERSED),
                hint: Style::default().add_modifier(Modifier::DIM),
            };
        }

        Self {
            entry_button: Style::default().fg(Color::White),
            action_button: Style::default()
                .fg(ACTION_COLOR)
                .add_modifier(Modifier::BOLD),
            display: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            pending: Style::default().fg(Color::Gray),
            history: Style::default().fg(Color::Gray),
            border: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            hint: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Default for CalcStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

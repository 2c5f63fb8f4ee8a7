//! On-screen keypad widget.
//!
//! Each button is a bordered box with its label centered. Geometry comes
//! from [`crate::state::keypad`] so clicks hit exactly what was drawn.

use crate::state::button_areas;
use crate::view::styles::CalcStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the calculator keypad.
pub struct KeypadWidget<'a> {
    styles: &'a CalcStyles,
}

impl<'a> KeypadWidget<'a> {
    /// Create a keypad using the given styles.
    pub fn new(styles: &'a CalcStyles) -> Self {
        Self { styles }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (button_area, button) in button_areas(area) {
            if button_area.width == 0 || button_area.height == 0 {
                continue;
            }

            let style = if button.is_entry() {
                self.styles.entry_button
            } else {
                self.styles.action_button
            };

            // Borders only when there is room for a label inside them
            let block = if button_area.height >= 3 && button_area.width >= 3 {
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.styles.border)
            } else {
                Block::default()
            };
            let inner = block.inner(button_area);
            block.render(button_area, buf);

            let label_row = Rect {
                y: inner.y + inner.height.saturating_sub(1) / 2,
                height: inner.height.min(1),
                ..inner
            };
            Paragraph::new(Line::styled(button.label, style))
                .alignment(Alignment::Center)
                .render(label_row, buf);
        }
    }
}

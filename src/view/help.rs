//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with the default shortcuts.
//! Triggered by '?', dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: header, then (keys, description) pairs.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Entry",
        &[
            ("0-9", "Type a digit"),
            (":", "Separate hours and minutes"),
            ("Backspace", "Delete last character"),
        ],
    ),
    (
        "Operations",
        &[
            ("+ -", "Add / subtract H:MM"),
            ("* x /", "Multiply / divide by a whole number"),
            ("Enter =", "Evaluate"),
            ("Esc Delete", "Clear everything, history included"),
        ],
    ),
    (
        "Application",
        &[
            ("↑ ↓", "Scroll history"),
            ("Mouse", "Click keypad buttons"),
            ("?", "Toggle this help"),
            ("q Ctrl+c", "Quit"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let header_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (index, (header, shortcuts)) in HELP_SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::styled(*header, header_style));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<11}", keys), key_style),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

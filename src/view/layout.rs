//! Screen layout rendering.
//!
//! Pure layout logic: splits the frame into history, display, keypad and
//! status bar, and renders each from [`AppState`].

use crate::state::AppState;
use crate::view::constants::{
    DISPLAY_PANE_HEIGHT, HISTORY_PANE_HEIGHT, STATUS_BAR_HEIGHT, STATUS_HINTS,
};
use crate::view::help::render_help_overlay;
use crate::view::keypad::KeypadWidget;
use crate::view::styles::CalcStyles;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Areas of the screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// History pane.
    pub history: Rect,
    /// Display pane.
    pub display: Rect,
    /// Keypad, when shown.
    pub keypad: Option<Rect>,
    /// Status bar.
    pub status: Rect,
}

/// Split the frame into screen regions.
///
/// Without a keypad the leftover rows go to the history pane.
pub fn calculate_areas(area: Rect, show_keypad: bool) -> ScreenAreas {
    let constraints = if show_keypad {
        [
            Constraint::Length(HISTORY_PANE_HEIGHT),
            Constraint::Length(DISPLAY_PANE_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ]
    } else {
        [
            Constraint::Min(0),
            Constraint::Length(DISPLAY_PANE_HEIGHT),
            Constraint::Length(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    ScreenAreas {
        history: chunks[0],
        display: chunks[1],
        keypad: show_keypad.then_some(chunks[2]),
        status: chunks[3],
    }
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &CalcStyles) {
    let areas = calculate_areas(frame.area(), state.show_keypad);

    render_history(frame, areas.history, state, styles);
    render_display(frame, areas.display, state, styles);
    if let Some(keypad_area) = areas.keypad {
        frame.render_widget(KeypadWidget::new(styles), keypad_area);
    }
    render_status(frame, areas.status, state, styles);

    if state.help_visible {
        render_help_overlay(frame);
    }
}

/// History entries visible in a pane `rows` high, oldest first.
///
/// `scroll` counts entries hidden below the bottom edge.
pub fn visible_history(entries: &[String], rows: usize, scroll: usize) -> &[String] {
    let end = entries.len().saturating_sub(scroll);
    let start = end.saturating_sub(rows);
    &entries[start..end]
}

fn render_history(frame: &mut Frame, area: Rect, state: &AppState, styles: &CalcStyles) {
    let block = Block::default()
        .title(" History ")
        .borders(Borders::ALL)
        .border_style(styles.border);
    let rows = usize::from(block.inner(area).height);

    let entries = state.calculator().history().entries();
    let lines: Vec<Line> = visible_history(entries, rows, state.history_scroll())
        .iter()
        .map(|entry| Line::styled(entry.as_str(), styles.history))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_display(frame: &mut Frame, area: Rect, state: &AppState, styles: &CalcStyles) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border);
    let width = usize::from(block.inner(area).width);
    let calculator = state.calculator();

    let pending = format!("{} {}", calculator.prior_left(), calculator.operator_symbol());
    let lines = vec![
        Line::styled(fit_right(pending.trim(), width), styles.pending),
        Line::styled(fit_right(calculator.display(), width), styles.display),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Right),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState, styles: &CalcStyles) {
    let line = match state.status() {
        Some(message) => Line::from(Span::styled(format!(" {} ", message), styles.error)),
        None => Line::from(Span::styled(STATUS_HINTS, styles.hint)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Keep the rightmost part of `text` that fits in `width` columns.
///
/// Truncated text starts with `…` so long values still show their last
/// digits, which are the ones being typed.
pub fn fit_right(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut kept = Vec::new();
    let mut used = 1; // room for the ellipsis
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(c);
    }

    std::iter::once('…').chain(kept.into_iter().rev()).collect()
}

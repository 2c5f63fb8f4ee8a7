//! Tests for help overlay functionality
//!
//! Verifies that pressing '?' toggles the help overlay and Escape dismisses it
//! without touching the calculator.

use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_question_mark_toggles_help_overlay() {
    // GIVEN: Application with initial state
    let mut harness = AcceptanceTestHarness::new().expect("harness");
    assert!(
        !harness.state().help_visible,
        "Help overlay should not be visible initially"
    );

    // WHEN: User presses '?' once
    harness.send_key_with_mods(KeyCode::Char('?'), KeyModifiers::SHIFT);

    // VERIFY: Help visible
    assert!(harness.state().help_visible, "First '?' should show help");

    // WHEN: User presses '?' again
    harness.send_key(KeyCode::Char('?'));

    // THEN: Help hidden (toggle behavior)
    assert!(
        !harness.state().help_visible,
        "Second '?' should toggle help off"
    );
}

#[test]
fn test_escape_closes_help_and_keeps_display() {
    // GIVEN: A half-typed value with help open
    let mut harness = AcceptanceTestHarness::new().expect("harness");
    harness.type_text("2:1");
    harness.send_key(KeyCode::Char('?'));

    // WHEN: User presses Escape
    harness.send_key(KeyCode::Esc);

    // THEN: Help is dismissed and Esc did not clear the calculator
    assert!(!harness.state().help_visible);
    assert_eq!(harness.state().calculator().display(), "2:1");
}

#[test]
fn test_help_overlay_renders_over_main_ui() {
    let mut harness = AcceptanceTestHarness::new().expect("harness");
    harness.send_key(KeyCode::Char('?'));

    let screen = harness.render_to_string();

    assert!(screen.contains("Keyboard Shortcuts"), "{}", screen);
    assert!(screen.contains("Evaluate"), "{}", screen);
}

#[test]
fn test_digits_still_reach_calculator_with_help_open() {
    let mut harness = AcceptanceTestHarness::new().expect("harness");
    harness.send_key(KeyCode::Char('?'));
    harness.type_text("42");
    assert_eq!(harness.state().calculator().display(), "42");
}

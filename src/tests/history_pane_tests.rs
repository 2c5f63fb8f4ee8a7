//! History pane scrolling and rendering.

use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

/// Builds `count` history entries: 1+1, then +1 repeatedly.
fn harness_with_history(count: usize) -> AcceptanceTestHarness {
    let mut harness = AcceptanceTestHarness::new().expect("harness");
    harness.type_text("1");
    for _ in 0..count {
        harness.type_text("+1");
    }
    harness.send_key(KeyCode::Enter);
    harness
}

#[test]
fn newest_entries_are_visible_by_default() {
    let mut harness = harness_with_history(6);
    assert_eq!(harness.state().calculator().history().len(), 6);

    let screen = harness.render_to_string();

    // Four rows fit; the oldest two are scrolled out
    assert!(screen.contains("6:00 + 1:0 = 7:00"), "{}", screen);
    assert!(screen.contains("3:00 + 1:0 = 4:00"), "{}", screen);
    assert!(!screen.contains("2:00 + 1:0 = 3:00"), "{}", screen);
}

#[test]
fn up_arrow_reveals_older_entries() {
    let mut harness = harness_with_history(6);

    harness.send_key(KeyCode::Up);
    harness.send_key(KeyCode::Up);
    let screen = harness.render_to_string();

    assert_eq!(harness.state().history_scroll(), 2);
    assert!(screen.contains("1 + 1:0 = 2:00"), "{}", screen);
    assert!(!screen.contains("6:00 + 1:0 = 7:00"), "{}", screen);
}

#[test]
fn scroll_stops_at_both_ends() {
    let mut harness = harness_with_history(3);

    for _ in 0..10 {
        harness.send_key(KeyCode::Up);
    }
    assert_eq!(harness.state().history_scroll(), 2);

    for _ in 0..10 {
        harness.send_key(KeyCode::Down);
    }
    assert_eq!(harness.state().history_scroll(), 0);
}

#[test]
fn new_entry_jumps_back_to_newest() {
    let mut harness = harness_with_history(3);
    harness.send_key(KeyCode::Up);
    assert_eq!(harness.state().history_scroll(), 1);

    harness.type_text("*2=");

    assert_eq!(harness.state().history_scroll(), 0);
}

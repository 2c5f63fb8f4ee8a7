//! Internal test modules - whitebox tests with crate access
//!
//! Drive the full TUI through the acceptance harness: key presses, keypad
//! clicks and rendered output.

// Harness-based acceptance tests
mod acceptance_scenarios;
mod help_overlay_tests;
mod history_pane_tests;

//! Calculator scenarios driven through the keyboard.

use crate::model::{Operator, TimeValue};
use crate::state::Phase;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

fn harness() -> AcceptanceTestHarness {
    AcceptanceTestHarness::new().expect("harness")
}

#[test]
fn add_two_durations() {
    // GIVEN: a fresh calculator
    let mut harness = harness();

    // WHEN: 1:30 + 2:15 Enter
    harness.type_text("1:30+2:15");
    harness.send_key(KeyCode::Enter);

    // THEN: result and history line
    let calc = harness.state().calculator();
    assert_eq!(calc.display(), "3:45");
    assert_eq!(calc.history().entries(), ["1:30 + 2:15 = 3:45"]);
    assert_eq!(calc.operator_symbol(), "");
    assert_eq!(calc.phase(), Phase::Result);
}

#[test]
fn multiply_by_factor() {
    let mut harness = harness();
    harness.type_text("5*3=");

    let calc = harness.state().calculator();
    assert_eq!(calc.display(), "15:00");
    assert_eq!(calc.history().entries(), ["5 * 3 = 15:00"]);
}

#[test]
fn x_key_multiplies() {
    let mut harness = harness();
    harness.type_text("1:20x3=");
    assert_eq!(harness.state().calculator().display(), "4:00");
}

#[test]
fn subtract_below_zero() {
    let mut harness = harness();
    harness.type_text("2:00-3:00=");

    let calc = harness.state().calculator();
    assert_eq!(calc.display(), "-1:00");
    assert_eq!(calc.history().entries(), ["2:00 - 3:0 = -1:00"]);
}

#[test]
fn divide_by_zero_keeps_pending_operation() {
    // GIVEN: 9 / 0 typed
    let mut harness = harness();
    harness.type_text("9/0");

    // WHEN: evaluated
    harness.send_key(KeyCode::Enter);

    // THEN: nothing committed, error shown
    let state = harness.state();
    let calc = state.calculator();
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.pending_value(), Some(TimeValue::new(9, 0)));
    assert_eq!(calc.pending_operator(), Some(Operator::Divide));
    assert!(calc.history().is_empty());
    assert_eq!(state.status(), Some("Cannot divide by zero"));

    // WHEN: the divisor is corrected
    harness.send_key(KeyCode::Backspace);
    harness.type_text("2=");

    // THEN: the pending division completes and the error clears
    assert_eq!(harness.state().calculator().display(), "4:30");
    assert_eq!(harness.state().status(), None);
}

#[test]
fn backspace_on_empty_display_is_noop() {
    let mut harness = harness();
    let before = harness.state().calculator().clone();

    harness.send_key(KeyCode::Backspace);

    assert_eq!(harness.state().calculator(), &before);
}

#[test]
fn chained_operators_fold_left_to_right() {
    let mut harness = harness();
    harness.type_text("1:00+0:30*2=");

    let calc = harness.state().calculator();
    assert_eq!(calc.display(), "3:00");
    assert_eq!(
        calc.history().entries(),
        ["1:00 + 0:30 = 1:30", "1:30 * 2 = 3:00"]
    );
}

#[test]
fn shifted_characters_are_accepted() {
    // Terminals report Shift with the shifted character
    let mut harness = harness();
    harness.send_key(KeyCode::Char('1'));
    harness.send_key_with_mods(KeyCode::Char(':'), KeyModifiers::SHIFT);
    harness.type_text("15");
    harness.send_key_with_mods(KeyCode::Char('+'), KeyModifiers::SHIFT);
    harness.type_text("0:45=");

    assert_eq!(harness.state().calculator().display(), "2:00");
}

#[test]
fn escape_clears_everything() {
    let mut harness = harness();
    harness.type_text("1+1=2+");

    harness.send_key(KeyCode::Esc);

    let calc = harness.state().calculator();
    assert_eq!(calc, &crate::state::Calculator::new());
}

#[test]
fn malformed_entry_is_ignored_silently() {
    let mut harness = harness();
    harness.type_text("1:2:3+");

    let state = harness.state();
    assert_eq!(state.calculator().display(), "1:2:3");
    assert_eq!(state.calculator().operator_symbol(), "");
    assert_eq!(state.status(), None);
}

#[test]
fn q_quits() {
    let mut harness = harness();
    assert!(harness.send_key(KeyCode::Char('q')));
    assert!(!harness.is_running());
}

#[test]
fn ctrl_c_quits() {
    let mut harness = harness();
    assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
}

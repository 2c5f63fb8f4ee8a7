//! Calculator and UI state (pure).
//!
//! All state transitions are plain functions testable without a terminal.

pub mod app_state;
pub mod engine;
pub mod keypad;
pub mod mouse_handler;

// Re-export for convenience
pub use app_state::{ActionOutcome, AppState};
pub use engine::{Calculator, CalculatorSnapshot, Phase};
pub use keypad::{button_areas, KeypadButton, KEYPAD};
pub use mouse_handler::detect_keypad_click;

//! Domain model types (pure).
//!
//! Time values, the token alphabet, history formatting and the error
//! taxonomy. Nothing here performs I/O.

pub mod error;
pub mod history;
pub mod key_action;
pub mod time_value;
pub mod token;

// Re-export for convenience
pub use error::{AppError, CalcError, ParseError, ScriptError};
pub use history::{format_history_entry, History, RightOperand};
pub use key_action::KeyAction;
pub use time_value::{format_time, parse_time, TimeValue, MINUTES_PER_HOUR};
pub use token::{parse_key_script, Operator, Token};

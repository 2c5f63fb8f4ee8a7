//! Error types for hourcalc.
//!
//! Errors are layered with `thiserror`:
//!
//! - [`AppError`] - top-level error for the binary, wrapping every shell failure
//!   - [`crate::config::ConfigError`] - config file read/parse failures
//!   - [`crate::logging::LoggingError`] - log file setup failures
//!   - [`ScriptError`] - undecodable characters in a `--keys` script
//!   - [`crate::view::TuiError`] - terminal failures
//!   - `std::io::Error` - batch output failures
//! - [`CalcError`] - per-token engine failures, never fatal
//!   - [`ParseError`] - display buffer is not `H` or `H:MM`
//!
//! # Recovery
//!
//! Every [`CalcError`] is local to one `apply` call and leaves the engine
//! untouched, so the next token is processed normally. `ParseError` and
//! `EmptyOperand` are swallowed by the shell (see [`CalcError::is_silent`]);
//! `DivideByZero` and `Overflow` are shown to the user.

use std::num::ParseIntError;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// A batch key script contained an unknown character.
    #[error("Invalid key script: {0}")]
    Script(#[from] ScriptError),

    /// Terminal setup or rendering failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),

    /// Writing batch output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single engine transition.
///
/// The engine state is exactly as it was before the failing token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The display buffer could not be read as a time value.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An operator arrived with nothing typed.
    #[error("No operand entered")]
    EmptyOperand,

    /// Division factor was zero.
    #[error("Cannot divide by zero")]
    DivideByZero,

    /// Result does not fit in the supported range.
    #[error("Result out of range")]
    Overflow,
}

impl CalcError {
    /// Whether the shell should ignore this error instead of reporting it.
    ///
    /// Malformed and missing operands make the operator key do nothing,
    /// without any message to the user.
    pub fn is_silent(&self) -> bool {
        matches!(self, CalcError::Parse(_) | CalcError::EmptyOperand)
    }
}

/// The display buffer is not a valid `H` or `H:MM` pair.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// One of the segments is empty or not an integer.
    #[error("Invalid time {input:?}: segment {segment:?} is not an integer")]
    InvalidSegment {
        /// Full text being parsed.
        input: String,
        /// Offending segment.
        segment: String,
        /// Integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// More than one `:` separator.
    #[error("Invalid time {input:?}: more than one ':'")]
    TooManySeparators {
        /// Full text being parsed.
        input: String,
    },
}

/// A `--keys` script contained a character outside the token alphabet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unexpected character {character:?} at position {position}")]
pub struct ScriptError {
    /// The rejected character.
    pub character: char,
    /// Zero-based character index in the script.
    pub position: usize,
}

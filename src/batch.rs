//! Non-interactive batch evaluation.
//!
//! Pure functions that feed a token script through the engine and render
//! the final state. Testable without a terminal; `main` only prints.

use crate::model::{parse_key_script, CalcError, ScriptError, Token};
use crate::state::Calculator;

/// An engine error raised while replaying a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchError {
    /// Zero-based index of the token in the script.
    pub index: usize,
    /// The rejected token.
    pub token: Token,
    /// Why the engine rejected it.
    pub error: CalcError,
}

/// Final state of a batch run.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Engine after the last token.
    pub calculator: Calculator,
    /// Every rejected token, silent ones included, in script order.
    pub errors: Vec<BatchError>,
}

impl BatchOutcome {
    /// Errors the interactive UI would report.
    pub fn reported_errors(&self) -> impl Iterator<Item = &BatchError> {
        self.errors.iter().filter(|e| !e.error.is_silent())
    }
}

/// Apply `tokens` in order to a fresh engine.
///
/// A rejected token leaves the engine unchanged and processing continues
/// with the next one.
pub fn run_tokens(tokens: impl IntoIterator<Item = Token>) -> BatchOutcome {
    let mut calculator = Calculator::new();
    let mut errors = Vec::new();

    for (index, token) in tokens.into_iter().enumerate() {
        if let Err(error) = calculator.apply(token) {
            errors.push(BatchError {
                index,
                token,
                error,
            });
        }
    }

    BatchOutcome { calculator, errors }
}

/// Decode `script` and run it.
///
/// # Errors
///
/// [`ScriptError`] if the script contains a character that is not a token.
/// Nothing is evaluated in that case.
pub fn run_script(script: &str) -> Result<BatchOutcome, ScriptError> {
    let tokens = parse_key_script(script)?;
    Ok(run_tokens(tokens))
}

/// Plain-text output: the display on the first line, then history oldest first.
pub fn render_text(calculator: &Calculator) -> String {
    let mut out = String::from(calculator.display());
    out.push('\n');
    for entry in calculator.history().entries() {
        out.push_str(entry);
        out.push('\n');
    }
    out
}

/// JSON output: the engine snapshot, pretty printed.
pub fn render_json(calculator: &Calculator) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&calculator.snapshot())
}

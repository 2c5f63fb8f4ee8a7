//! Calculator engine: a pure reducer over [`Token`]s.
//!
//! The engine owns the display buffer, the pending operation, the text of
//! the left operand as it was typed, and the history log. Every field is
//! changed only by [`Calculator::apply`], and a failing `apply` changes
//! nothing.
//!
//! # Phases
//!
//! - **Idle**: no pending operator; the buffer may hold the first operand.
//! - **AwaitingOperand**: an operator is committed and the buffer collects
//!   the right operand.
//! - **Result**: `=` just evaluated; the buffer holds the result and can seed
//!   a new chain.

use crate::model::{
    format_history_entry, parse_time, CalcError, History, Operator, RightOperand, TimeValue,
    Token,
};
use serde::Serialize;

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;

/// Coarse state of the engine, derived from its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    /// No pending operator.
    #[default]
    Idle,
    /// Operator committed, waiting for the right operand.
    AwaitingOperand,
    /// Showing the result of `=`.
    Result,
}

/// Left operand and operator waiting for a right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    value: TimeValue,
    operator: Operator,
}

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorSnapshot {
    /// Display buffer being typed, or the last result.
    pub display: String,
    /// Left operand text as typed; empty when no operation is pending.
    pub prior_left: String,
    /// Pending operator symbol; empty when none.
    pub operator: String,
    /// Parsed left operand of the pending operation.
    pub pending: Option<TimeValue>,
    /// Completed operations, oldest first.
    pub history: Vec<String>,
}

/// The hours calculator state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    display: String,
    prior_left: String,
    pending: Option<Pending>,
    history: History,
    phase: Phase,
}

impl Calculator {
    /// Create an engine with an empty display and no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one token.
    ///
    /// # Errors
    ///
    /// - [`CalcError::EmptyOperand`] for an operator with nothing typed
    /// - [`CalcError::Parse`] when the buffer is not `H` or `H:MM`
    /// - [`CalcError::DivideByZero`] for a `/` evaluation with factor 0
    /// - [`CalcError::Overflow`] when the result leaves the `i64` range
    ///
    /// On error the engine is left exactly as it was.
    pub fn apply(&mut self, token: Token) -> Result<(), CalcError> {
        match token {
            Token::Digit(_) | Token::Separator => {
                if let Some(c) = token.buffer_char() {
                    self.display.push(c);
                    self.phase = self.editing_phase();
                }
                Ok(())
            }
            Token::Back => {
                if self.display.pop().is_some() {
                    self.phase = self.editing_phase();
                }
                Ok(())
            }
            Token::Clear => {
                *self = Self::new();
                Ok(())
            }
            Token::Equals => self.apply_operator(None),
            Token::Operator(op) => self.apply_operator(Some(op)),
        }
    }

    /// Process a token given by its button label.
    ///
    /// Labels outside the alphabet are ignored.
    pub fn apply_label(&mut self, label: &str) -> Result<(), CalcError> {
        match Token::from_label(label) {
            Some(token) => self.apply(token),
            None => Ok(()),
        }
    }

    /// Handle `=` (`next == None`) or a binary operator.
    fn apply_operator(&mut self, next: Option<Operator>) -> Result<(), CalcError> {
        // Everything is computed before anything is written back.
        let evaluated = match self.pending {
            Some(pending) => {
                if self.display.is_empty() {
                    return Err(CalcError::EmptyOperand);
                }
                let (result, right) = evaluate(pending, &self.display)?;
                let result_text = result.to_string();
                let entry = (!self.prior_left.is_empty()).then(|| {
                    format_history_entry(&self.prior_left, pending.operator, right, &result_text)
                });
                Some((result_text, entry))
            }
            None => None,
        };

        match next {
            None => {
                // `=` without a pending operation, `=` twice included
                let Some((result_text, entry)) = evaluated else {
                    return Ok(());
                };
                self.display = result_text;
                self.history.extend(entry);
                self.pending = None;
                self.prior_left.clear();
                self.phase = Phase::Result;
            }
            Some(operator) => {
                let left_text = match &evaluated {
                    Some((result_text, _)) => result_text.clone(),
                    None => self.display.clone(),
                };
                if left_text.is_empty() {
                    return Err(CalcError::EmptyOperand);
                }
                let value = parse_time(&left_text)?;

                if let Some((_, entry)) = evaluated {
                    self.history.extend(entry);
                }
                self.prior_left = left_text;
                self.pending = Some(Pending { value, operator });
                self.display.clear();
                self.phase = Phase::AwaitingOperand;
            }
        }
        Ok(())
    }

    fn editing_phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::AwaitingOperand
        } else {
            Phase::Idle
        }
    }

    /// Current display buffer.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left operand text of the pending operation; empty when none.
    pub fn prior_left(&self) -> &str {
        &self.prior_left
    }

    /// Pending operator, if any.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// Pending operator symbol; empty when none.
    pub fn operator_symbol(&self) -> &'static str {
        self.pending_operator().map_or("", Operator::symbol)
    }

    /// Parsed left operand of the pending operation.
    pub fn pending_value(&self) -> Option<TimeValue> {
        self.pending.map(|p| p.value)
    }

    /// Completed operations.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Copy of the renderable state.
    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            display: self.display.clone(),
            prior_left: self.prior_left.clone(),
            operator: self.operator_symbol().to_string(),
            pending: self.pending_value(),
            history: self.history.entries().to_vec(),
        }
    }
}

/// Evaluate the pending operation against the buffer text.
fn evaluate(pending: Pending, buffer: &str) -> Result<(TimeValue, RightOperand), CalcError> {
    let left = pending.value;
    match pending.operator {
        Operator::Add => {
            let right = parse_time(buffer)?;
            Ok((left.add(right)?, RightOperand::Time(right)))
        }
        Operator::Subtract => {
            let right = parse_time(buffer)?;
            Ok((left.subtract(right)?, RightOperand::Time(right)))
        }
        Operator::Multiply => {
            let factor = parse_factor(buffer);
            Ok((left.multiply(factor)?, RightOperand::Factor(factor)))
        }
        Operator::Divide => {
            let factor = parse_factor(buffer);
            Ok((left.divide(factor)?, RightOperand::Factor(factor)))
        }
    }
}

/// Factor for `*` and `/`; anything that is not a plain integer counts as 1.
fn parse_factor(buffer: &str) -> i64 {
    buffer.parse().unwrap_or(1)
}

//! Log of completed operations.

use crate::model::time_value::TimeValue;
use crate::model::token::Operator;
use std::fmt;

/// The right-hand operand consumed by an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RightOperand {
    /// Time value for `+` and `-`.
    Time(TimeValue),
    /// Integer factor for `*` and `/`.
    Factor(i64),
}

impl fmt::Display for RightOperand {
    /// Time operands are echoed as `h:m` without padding, the way they were
    /// read from the buffer; factors as plain integers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RightOperand::Time(time) => write!(f, "{}:{}", time.hours, time.minutes),
            RightOperand::Factor(factor) => write!(f, "{}", factor),
        }
    }
}

/// Format one history line: `"<left> <op> <right> = <result>"`.
pub fn format_history_entry(
    left: &str,
    operator: Operator,
    right: RightOperand,
    result: &str,
) -> String {
    format!("{} {} {} = {}", left, operator, right, result)
}

/// Append-only list of completed operations, oldest first.
///
/// Only a full reset empties it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no operation has completed since the last reset.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Extend<String> for History {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

//! The token alphabet consumed by the calculator engine.
//!
//! Tokens are what the keypad buttons are labelled with. Decoding raw key
//! or mouse events into tokens happens in the shell.

use crate::model::error::ScriptError;
use serde::Serialize;
use std::fmt;

/// A binary operator awaiting its right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    /// `+`, right operand is a time value.
    Add,
    /// `-`, right operand is a time value.
    Subtract,
    /// `*`, right operand is an integer factor.
    Multiply,
    /// `/`, right operand is an integer factor.
    Divide,
}

impl Operator {
    /// Symbol shown on the keypad and in history entries.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Whether the right operand is a bare factor rather than a time value.
    pub fn takes_factor(self) -> bool {
        matches!(self, Operator::Multiply | Operator::Divide)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One unit of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A decimal digit, `0..=9`.
    Digit(u8),
    /// The `:` between hours and minutes.
    Separator,
    /// Commit or chain a binary operator.
    Operator(Operator),
    /// Evaluate the pending operation.
    Equals,
    /// Full reset, history included.
    Clear,
    /// Delete the last typed character.
    Back,
}

impl Token {
    /// Parse a button label (`"0"`..`"9"`, `":"`, `"+"`, `"-"`, `"*"`, `"/"`,
    /// `"="`, `"C"`, `"Back"`).
    pub fn from_label(label: &str) -> Option<Token> {
        let token = match label {
            ":" => Token::Separator,
            "+" => Token::Operator(Operator::Add),
            "-" => Token::Operator(Operator::Subtract),
            "*" => Token::Operator(Operator::Multiply),
            "/" => Token::Operator(Operator::Divide),
            "=" => Token::Equals,
            "C" => Token::Clear,
            "Back" => Token::Back,
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Token::from_digit_char(c)?,
                    _ => return None,
                }
            }
        };
        Some(token)
    }

    /// Label of this token, inverse of [`Token::from_label`].
    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Token::Digit(d) => DIGITS.get(usize::from(d)).copied().unwrap_or("?"),
            Token::Separator => ":",
            Token::Operator(op) => op.symbol(),
            Token::Equals => "=",
            Token::Clear => "C",
            Token::Back => "Back",
        }
    }

    /// Digit token for an ASCII digit character.
    pub fn from_digit_char(c: char) -> Option<Token> {
        c.to_digit(10).map(|d| Token::Digit(d as u8))
    }

    /// Character appended to the display buffer, for digits and `:` only.
    pub fn buffer_char(self) -> Option<char> {
        match self {
            Token::Digit(d) => char::from_digit(u32::from(d), 10),
            Token::Separator => Some(':'),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decode a batch key script into tokens.
///
/// Each non-whitespace character is one token. Besides the single-character
/// labels, `<` means backspace and `x` means multiply.
///
/// # Errors
///
/// [`ScriptError`] for the first character outside the alphabet.
pub fn parse_key_script(script: &str) -> Result<Vec<Token>, ScriptError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, character)| {
            let token = match character {
                '<' => Some(Token::Back),
                'x' => Some(Token::Operator(Operator::Multiply)),
                c => Token::from_label(c.encode_utf8(&mut [0; 4])),
            };
            token.ok_or(ScriptError {
                character,
                position,
            })
        })
        .collect()
}

//! Signed hour/minute durations and their text form.
//!
//! `parse_time` and `format_time` are the only bridge between the display
//! buffer and arithmetic. Parsing never normalizes; the arithmetic functions
//! always do.

use crate::model::error::{CalcError, ParseError};
use serde::Serialize;
use std::fmt;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: i64 = 60;

/// A duration in hours and minutes.
///
/// After any arithmetic the minutes lie in `[0, 60)` and the sign lives
/// entirely in `hours`, so `-1:30` means minus one hour plus thirty minutes
/// (that is, -30 minutes). Values produced by [`parse_time`] are not
/// normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TimeValue {
    /// Whole hours, carrying the sign of the duration.
    pub hours: i64,
    /// Minutes; in `[0, 60)` once normalized.
    pub minutes: i64,
}

impl TimeValue {
    /// Create a time value without normalizing.
    pub const fn new(hours: i64, minutes: i64) -> Self {
        Self { hours, minutes }
    }

    /// Split a signed minute count into normalized hours and minutes.
    pub fn from_total_minutes(total: i64) -> Self {
        Self {
            hours: total.div_euclid(MINUTES_PER_HOUR),
            minutes: total.rem_euclid(MINUTES_PER_HOUR),
        }
    }

    /// Total minutes represented, or `None` on overflow.
    pub fn total_minutes(self) -> Option<i64> {
        self.hours
            .checked_mul(MINUTES_PER_HOUR)?
            .checked_add(self.minutes)
    }

    /// Add another duration, carrying whole hours out of the minute sum.
    pub fn add(self, rhs: TimeValue) -> Result<TimeValue, CalcError> {
        let total_minutes = self
            .minutes
            .checked_add(rhs.minutes)
            .ok_or(CalcError::Overflow)?;
        let hours = self
            .hours
            .checked_add(rhs.hours)
            .and_then(|h| h.checked_add(total_minutes.div_euclid(MINUTES_PER_HOUR)))
            .ok_or(CalcError::Overflow)?;
        Ok(TimeValue::new(hours, total_minutes.rem_euclid(MINUTES_PER_HOUR)))
    }

    /// Subtract another duration, borrowing an hour when the minutes go negative.
    pub fn subtract(self, rhs: TimeValue) -> Result<TimeValue, CalcError> {
        let total_minutes = self
            .minutes
            .checked_sub(rhs.minutes)
            .ok_or(CalcError::Overflow)?;
        // div_euclid is -1 for a single borrow, 0 when no borrow is needed
        let hours = self
            .hours
            .checked_sub(rhs.hours)
            .and_then(|h| h.checked_add(total_minutes.div_euclid(MINUTES_PER_HOUR)))
            .ok_or(CalcError::Overflow)?;
        Ok(TimeValue::new(hours, total_minutes.rem_euclid(MINUTES_PER_HOUR)))
    }

    /// Scale the duration by an integer factor.
    pub fn multiply(self, factor: i64) -> Result<TimeValue, CalcError> {
        let total = self
            .total_minutes()
            .and_then(|t| t.checked_mul(factor))
            .ok_or(CalcError::Overflow)?;
        Ok(TimeValue::from_total_minutes(total))
    }

    /// Divide the duration by an integer factor, truncating to whole minutes.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivideByZero`] when `factor` is zero.
    pub fn divide(self, factor: i64) -> Result<TimeValue, CalcError> {
        if factor == 0 {
            return Err(CalcError::DivideByZero);
        }
        let total = self
            .total_minutes()
            .and_then(|t| t.checked_div(factor))
            .ok_or(CalcError::Overflow)?;
        Ok(TimeValue::from_total_minutes(total))
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(self.hours, self.minutes))
    }
}

/// Parse `H` or `H:MM` into a time value.
///
/// A missing minute segment means zero minutes. Minutes of 60 or more are
/// kept as typed.
///
/// # Errors
///
/// Returns [`ParseError`] when a segment is empty or not an integer, or when
/// the text holds more than one `:`.
pub fn parse_time(input: &str) -> Result<TimeValue, ParseError> {
    let mut parts = input.split(':');
    let hours_text = parts.next().unwrap_or_default();
    let minutes_text = parts.next();

    if parts.next().is_some() {
        return Err(ParseError::TooManySeparators {
            input: input.to_string(),
        });
    }

    let hours = parse_segment(input, hours_text)?;
    let minutes = match minutes_text {
        Some(text) => parse_segment(input, text)?,
        None => 0,
    };

    Ok(TimeValue::new(hours, minutes))
}

fn parse_segment(input: &str, segment: &str) -> Result<i64, ParseError> {
    segment
        .parse::<i64>()
        .map_err(|source| ParseError::InvalidSegment {
            input: input.to_string(),
            segment: segment.to_string(),
            source,
        })
}

/// Render hours and minutes as `H:MM`.
///
/// Minutes are zero-padded to two digits; hours are a plain signed integer.
pub fn format_time(hours: i64, minutes: i64) -> String {
    format!("{}:{:02}", hours, minutes)
}

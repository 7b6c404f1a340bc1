//! Checked 16-bit arithmetic
//!
//! Operands and results are signed 16-bit values. Every operation is
//! computed in `i32` first, so range checks never depend on dividing by
//! an operand.

use crate::state::{ErrorKind, Operator};

/// Smallest representable value
pub const MIN_VALUE: i32 = i16::MIN as i32;

/// Largest representable value
pub const MAX_VALUE: i32 = i16::MAX as i32;

/// Operands at or above this value cannot take another digit
///
/// One decimal digit below the 16-bit boundary: 3275 * 10 + 9 = 32759.
pub const DIGIT_APPEND_LIMIT: i16 = 3276;

/// Check whether `a op b` leaves the 16-bit range
///
/// For division the flag means the divisor is zero (or the single
/// `-32768 / -1` case that does not fit).
pub fn check_overflow(a: i16, b: i16, op: Operator) -> bool {
    match op {
        Operator::Divide if b == 0 => true,
        _ => !in_range(widened(a, b, op)),
    }
}

/// Compute `a op b`, returning 0 for division by zero
///
/// Callers are expected to consult [`check_overflow`] first; out-of-range
/// products are saturated rather than wrapped.
pub fn calculate(a: i16, b: i16, op: Operator) -> i16 {
    if op == Operator::Divide && b == 0 {
        return 0;
    }
    widened(a, b, op).clamp(MIN_VALUE, MAX_VALUE) as i16
}

/// Guarded evaluation used by the engine
///
/// Returns the value, or the error that should put the engine into its
/// error state.
pub fn evaluate(a: i16, b: i16, op: Operator) -> Result<i16, ErrorKind> {
    if check_overflow(a, b, op) {
        if op == Operator::Divide && b == 0 {
            return Err(ErrorKind::DivideByZero);
        }
        return Err(ErrorKind::Overflow);
    }
    Ok(calculate(a, b, op))
}

/// Append a decimal digit to an operand
///
/// Refuses once the operand has reached [`DIGIT_APPEND_LIMIT`].
pub fn append_digit(value: i16, digit: u8) -> Result<i16, ErrorKind> {
    if value >= DIGIT_APPEND_LIMIT || digit > 9 {
        return Err(ErrorKind::Overflow);
    }
    value
        .checked_mul(10)
        .and_then(|v| v.checked_add(digit as i16))
        .ok_or(ErrorKind::Overflow)
}

fn widened(a: i16, b: i16, op: Operator) -> i32 {
    let (a, b) = (a as i32, b as i32);
    match op {
        Operator::Plus => a + b,
        Operator::Minus => a - b,
        Operator::Times => a * b,
        // Truncates toward zero; b == 0 is filtered by every caller
        Operator::Divide => a.checked_div(b).unwrap_or(0),
    }
}

fn in_range(value: i32) -> bool {
    (MIN_VALUE..=MAX_VALUE).contains(&value)
}

//! Keypad scanners

pub mod matrix;

pub use matrix::MatrixKeypad;

/// Keypad scan errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadError {
    /// A row or column pin reported an error
    Pin,
}

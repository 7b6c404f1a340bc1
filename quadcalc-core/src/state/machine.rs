//! Calculator states and error taxonomy
//!
//! The engine's position in the entry protocol. Operand values live in
//! [`crate::engine::CalculatorEngine`]; this type only records which
//! phase of an expression the user is in.

/// Calculator states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalculatorState {
    /// Nothing entered yet
    #[default]
    Idle,
    /// Typing digits into the first or second operand
    ///
    /// Which one depends on whether an operator has been chosen.
    EnteringOperand,
    /// Operator chosen, waiting for the first digit of the second operand
    OperatorChosen,
    /// Expression evaluated, result on screen
    CalcDone,
    /// Arithmetic fault; only Clear leaves this state
    Error(ErrorKind),
}

/// Types of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Operand entry or result outside the signed 16-bit range
    Overflow,
    /// Division with a zero divisor
    DivideByZero,
    /// Unrecognized input (not produced by the current key alphabet)
    Invalid,
    /// Unknown/unclassified error
    Unknown,
}

impl ErrorKind {
    /// Numeric error code
    pub const fn code(self) -> u8 {
        match self {
            ErrorKind::Overflow => 1,
            ErrorKind::DivideByZero => 2,
            ErrorKind::Invalid => 3,
            ErrorKind::Unknown => 0xFF,
        }
    }

    /// Classify a numeric error code, falling back to `Unknown`
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => ErrorKind::Overflow,
            2 => ErrorKind::DivideByZero,
            3 => ErrorKind::Invalid,
            _ => ErrorKind::Unknown,
        }
    }

    /// Short description for the first display line
    pub const fn description(self) -> &'static str {
        match self {
            ErrorKind::Overflow => "Overflow",
            ErrorKind::DivideByZero => "Div by 0",
            ErrorKind::Invalid => "Invalid",
            ErrorKind::Unknown => "Unknown",
        }
    }
}

impl CalculatorState {
    /// Check if this is an error state
    pub fn is_error(&self) -> bool {
        matches!(self, CalculatorState::Error(_))
    }

    /// Error kind, present only in the error state
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            CalculatorState::Error(kind) => Some(*kind),
            _ => None,
        }
    }
}

//! Display model
//!
//! Two lines of text derived purely from an [`EngineSnapshot`]. Lines may
//! be longer than the physical display; fitting them is up to the
//! renderer.

use core::fmt::Write;

use heapless::String;

use crate::engine::EngineSnapshot;
use crate::state::{CalculatorState, ErrorKind, Operator};

/// Capacity of one model line
///
/// Fits the longest prompt plus the memory indicator.
pub const MODEL_LINE_LEN: usize = 24;

/// Prefix shown while the memory register is non-zero
pub const MEMORY_INDICATOR: &str = "M ";

/// One line of model text
pub type ModelLine = String<MODEL_LINE_LEN>;

/// Two-line representation of the engine state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayModel {
    lines: [ModelLine; 2],
}

impl DisplayModel {
    /// Derive the model for a snapshot
    pub fn from_snapshot(snap: &EngineSnapshot) -> Self {
        let mut model = Self::default();

        if let CalculatorState::Error(kind) = snap.state {
            model.write_error(kind);
            return model;
        }

        if snap.memory != 0 {
            let _ = model.lines[0].push_str(MEMORY_INDICATOR);
        }

        let [line1, line2] = &mut model.lines;
        match (snap.state, snap.operator) {
            (CalculatorState::Idle, _) => {
                let _ = line1.push_str("Ready...");
                let _ = line2.push_str("# for help");
            }
            (CalculatorState::EnteringOperand, None) => {
                let _ = write!(line1, "{}", snap.operand1);
                let _ = line2.push_str("Enter operation");
            }
            (CalculatorState::EnteringOperand, Some(op)) => {
                let _ = write!(line1, "{} {} {}", snap.operand1, op.symbol(), snap.operand2);
                let _ = line2.push_str("Press = or continue");
            }
            (CalculatorState::OperatorChosen, op) => {
                let _ = write!(line1, "{} {} ?", snap.operand1, symbol(op));
                let _ = line2.push_str("Enter second number");
            }
            (CalculatorState::CalcDone, op) => {
                let _ = write!(line1, "{}{}{}=", snap.operand1, symbol(op), snap.operand2);
                let _ = write!(line2, "{}", snap.result);
            }
            (CalculatorState::Error(_), _) => {}
        }

        model
    }

    /// First line
    pub fn line1(&self) -> &str {
        self.lines[0].as_str()
    }

    /// Second line
    pub fn line2(&self) -> &str {
        self.lines[1].as_str()
    }

    /// Both lines, top first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.as_str())
    }

    fn write_error(&mut self, kind: ErrorKind) {
        let _ = write!(self.lines[0], "ERROR: {}", kind.description());
        let _ = self.lines[1].push_str("Press C to clear");
    }
}

fn symbol(op: Option<Operator>) -> char {
    op.map(Operator::symbol).unwrap_or(' ')
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayModel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "[{} | {}]", self.line1(), self.line2());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(state: CalculatorState) -> EngineSnapshot {
        EngineSnapshot {
            state,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_model() {
        let model = DisplayModel::from_snapshot(&EngineSnapshot::default());
        assert_eq!(model.line1(), "Ready...");
        assert_eq!(model.line2(), "# for help");
    }

    #[test]
    fn test_first_operand_model() {
        let snap = EngineSnapshot {
            operand1: 12,
            ..snapshot(CalculatorState::EnteringOperand)
        };
        let model = DisplayModel::from_snapshot(&snap);
        assert_eq!(model.line1(), "12");
        assert_eq!(model.line2(), "Enter operation");
    }

    #[test]
    fn test_second_operand_model() {
        let snap = EngineSnapshot {
            operand1: -15,
            operand2: 4,
            operator: Some(Operator::Times),
            ..snapshot(CalculatorState::EnteringOperand)
        };
        let model = DisplayModel::from_snapshot(&snap);
        assert_eq!(model.line1(), "-15 * 4");
        assert_eq!(model.line2(), "Press = or continue");
    }

    #[test]
    fn test_operator_chosen_model() {
        let snap = EngineSnapshot {
            operand1: 7,
            operator: Some(Operator::Divide),
            ..snapshot(CalculatorState::OperatorChosen)
        };
        let model = DisplayModel::from_snapshot(&snap);
        assert_eq!(model.line1(), "7 / ?");
        assert_eq!(model.line2(), "Enter second number");
    }

    #[test]
    fn test_result_model() {
        let snap = EngineSnapshot {
            operand1: 12,
            operand2: 30,
            operator: Some(Operator::Plus),
            result: 42,
            ..snapshot(CalculatorState::CalcDone)
        };
        let model = DisplayModel::from_snapshot(&snap);
        assert_eq!(model.line1(), "12+30=");
        assert_eq!(model.line2(), "42");
    }

    #[test]
    fn test_error_models() {
        let cases = [
            (ErrorKind::Overflow, "ERROR: Overflow"),
            (ErrorKind::DivideByZero, "ERROR: Div by 0"),
            (ErrorKind::Invalid, "ERROR: Invalid"),
            (ErrorKind::Unknown, "ERROR: Unknown"),
        ];
        for (kind, text) in cases {
            let model = DisplayModel::from_snapshot(&snapshot(CalculatorState::Error(kind)));
            assert_eq!(model.line1(), text);
            assert_eq!(model.line2(), "Press C to clear");
        }
    }

    #[test]
    fn test_memory_indicator() {
        let snap = EngineSnapshot {
            operand1: 12,
            memory: 5,
            ..snapshot(CalculatorState::EnteringOperand)
        };
        assert_eq!(DisplayModel::from_snapshot(&snap).line1(), "M 12");

        let idle = EngineSnapshot {
            memory: -1,
            ..Default::default()
        };
        assert_eq!(DisplayModel::from_snapshot(&idle).line1(), "M Ready...");
    }

    #[test]
    fn test_memory_indicator_hidden_on_error() {
        let snap = EngineSnapshot {
            memory: 5,
            ..snapshot(CalculatorState::Error(ErrorKind::Overflow))
        };
        assert_eq!(DisplayModel::from_snapshot(&snap).line1(), "ERROR: Overflow");
    }

    #[test]
    fn test_extreme_values_fit() {
        let snap = EngineSnapshot {
            operand1: i16::MIN,
            operand2: 32759,
            operator: Some(Operator::Minus),
            memory: 1,
            ..snapshot(CalculatorState::EnteringOperand)
        };
        assert_eq!(DisplayModel::from_snapshot(&snap).line1(), "M -32768 - 32759");
    }
}

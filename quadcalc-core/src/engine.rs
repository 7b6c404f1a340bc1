//! Calculator engine
//!
//! Consumes one key at a time and owns all calculation state. The engine
//! never fails: keys that make no sense in the current state are ignored,
//! and arithmetic faults park it in [`CalculatorState::Error`] until the
//! user clears.

use crate::arith;
use crate::model::DisplayModel;
use crate::state::{CalculatorState, ErrorKind, Key, Operator};

/// Copy of every engine field at one instant
///
/// The default value is the exact idle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineSnapshot {
    /// Current position in the state machine
    pub state: CalculatorState,
    /// First operand, or running total after chaining
    pub operand1: i16,
    /// Second operand (meaningless while `operator` is `None`)
    pub operand2: i16,
    /// Pending operator
    pub operator: Option<Operator>,
    /// Last computed value (meaningful in `CalcDone` only)
    pub result: i16,
    /// Memory register, shown as an indicator when non-zero
    pub memory: i16,
}

impl EngineSnapshot {
    /// Error kind, present only in the error state
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.state.error_kind()
    }
}

/// Four-function calculator state machine
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
    operand1: i16,
    operand2: i16,
    operator: Option<Operator>,
    result: i16,
    memory: i16,
}

impl CalculatorEngine {
    /// Create an engine in the idle state
    pub const fn new() -> Self {
        Self {
            state: CalculatorState::Idle,
            operand1: 0,
            operand2: 0,
            operator: None,
            result: 0,
            memory: 0,
        }
    }

    /// Get current state
    pub fn state(&self) -> CalculatorState {
        self.state
    }

    /// Get the pending error, if any
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.state.error_kind()
    }

    /// Copy all fields out
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            state: self.state,
            operand1: self.operand1,
            operand2: self.operand2,
            operator: self.operator,
            result: self.result,
            memory: self.memory,
        }
    }

    /// Two-line display content for the current state
    pub fn current_display_model(&self) -> DisplayModel {
        DisplayModel::from_snapshot(&self.snapshot())
    }

    /// Process one key
    ///
    /// This is the core state transition logic. `Help` is display-only
    /// and leaves the engine untouched.
    pub fn process_key(&mut self, key: Key) {
        use CalculatorState::*;

        match (self.state, key) {
            (_, Key::Help) => {}

            // Clear leaves every state, including errors
            (_, Key::Clear) => self.reset(),

            // Errors absorb everything else
            (Error(_), _) => {}

            // Idle
            (Idle, Key::Digit(d)) => self.start_operand(d),
            (Idle, _) => {}

            // Entering an operand
            (EnteringOperand, Key::Digit(d)) => self.append_digit(d),
            (EnteringOperand, Key::Operator(op)) => match self.operator {
                None => self.choose_operator(op),
                Some(pending) => self.chain(pending, op),
            },
            (EnteringOperand, Key::Equals) => {
                if let Some(pending) = self.operator {
                    self.finish(pending);
                }
            }

            // Operator chosen
            (OperatorChosen, Key::Digit(d)) => {
                self.operand2 = d as i16;
                self.state = EnteringOperand;
            }
            (OperatorChosen, _) => {}

            // Result on screen
            (CalcDone, Key::Digit(d)) => self.start_operand(d),
            (CalcDone, Key::Operator(op)) => {
                self.operand1 = self.result;
                self.choose_operator(op);
            }
            (CalcDone, Key::Equals) => {}
        }
    }

    /// Reset all calculation fields to their idle defaults
    ///
    /// The memory register survives a clear.
    pub fn reset(&mut self) {
        self.state = CalculatorState::Idle;
        self.operand1 = 0;
        self.operand2 = 0;
        self.operator = None;
        self.result = 0;
    }

    /// Begin a fresh calculation with a single digit
    fn start_operand(&mut self, digit: u8) {
        self.operand1 = digit as i16;
        self.operand2 = 0;
        self.result = 0;
        self.operator = None;
        self.state = CalculatorState::EnteringOperand;
    }

    fn append_digit(&mut self, digit: u8) {
        let target = match self.operator {
            None => &mut self.operand1,
            Some(_) => &mut self.operand2,
        };

        match arith::append_digit(*target, digit) {
            Ok(value) => *target = value,
            Err(kind) => self.fail(kind),
        }
    }

    fn choose_operator(&mut self, op: Operator) {
        self.operand2 = 0;
        self.operator = Some(op);
        self.state = CalculatorState::OperatorChosen;
    }

    /// Evaluate the pending expression and continue with a new operator
    fn chain(&mut self, pending: Operator, next: Operator) {
        match arith::evaluate(self.operand1, self.operand2, pending) {
            Ok(value) => {
                self.result = value;
                self.operand1 = value;
                self.choose_operator(next);
            }
            Err(kind) => self.fail(kind),
        }
    }

    /// Evaluate the pending expression and show the result
    fn finish(&mut self, pending: Operator) {
        match arith::evaluate(self.operand1, self.operand2, pending) {
            Ok(value) => {
                self.result = value;
                self.state = CalculatorState::CalcDone;
            }
            Err(kind) => self.fail(kind),
        }
    }

    fn fail(&mut self, kind: ErrorKind) {
        self.state = CalculatorState::Error(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(engine: &mut CalculatorEngine, keys: &str) {
        for c in keys.chars() {
            engine.process_key(Key::from_char(c).unwrap());
        }
    }

    fn engine_after(keys: &str) -> CalculatorEngine {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, keys);
        engine
    }

    #[test]
    fn test_starts_idle() {
        let engine = CalculatorEngine::new();
        assert_eq!(engine.snapshot(), EngineSnapshot::default());
        assert!(engine.error_kind().is_none());
    }

    #[test]
    fn test_first_operand_entry() {
        let engine = engine_after("123");
        let snap = engine.snapshot();
        assert_eq!(snap.state, CalculatorState::EnteringOperand);
        assert_eq!(snap.operand1, 123);
        assert!(snap.operator.is_none());
    }

    #[test]
    fn test_idle_ignores_operators_and_equals() {
        let engine = engine_after("+=*");
        assert_eq!(engine.snapshot(), EngineSnapshot::default());
    }

    #[test]
    fn test_simple_expression() {
        let engine = engine_after("12+30=");
        let snap = engine.snapshot();
        assert_eq!(snap.state, CalculatorState::CalcDone);
        assert_eq!(snap.operand1, 12);
        assert_eq!(snap.operand2, 30);
        assert_eq!(snap.operator, Some(Operator::Plus));
        assert_eq!(snap.result, 42);
    }

    #[test]
    fn test_chained_operation() {
        let engine = engine_after("2+3+4=");
        assert_eq!(engine.state(), CalculatorState::CalcDone);
        assert_eq!(engine.snapshot().result, 9);
        assert_eq!(engine.snapshot().operand1, 5);
    }

    #[test]
    fn test_chain_switches_operator() {
        let engine = engine_after("6*7-2=");
        assert_eq!(engine.snapshot().result, 40);
    }

    #[test]
    fn test_operator_chosen_ignores_operators_and_equals() {
        let mut engine = engine_after("9+");
        let before = engine.snapshot();
        press(&mut engine, "-=*");
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.state(), CalculatorState::OperatorChosen);
    }

    #[test]
    fn test_equals_without_operator_is_ignored() {
        let mut engine = engine_after("45");
        let before = engine.snapshot();
        press(&mut engine, "=");
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_equals_after_result_is_ignored() {
        let mut engine = engine_after("8/2=");
        let before = engine.snapshot();
        press(&mut engine, "=");
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        let mut engine = engine_after("5+5=");
        assert_eq!(engine.snapshot().result, 10);

        press(&mut engine, "7");
        let snap = engine.snapshot();
        assert_eq!(snap.state, CalculatorState::EnteringOperand);
        assert_eq!(snap.operand1, 7);
        assert_eq!(snap.operand2, 0);
        assert_eq!(snap.result, 0);
        assert!(snap.operator.is_none());
    }

    #[test]
    fn test_operator_after_result_chains() {
        let engine = engine_after("5+5=*3=");
        let snap = engine.snapshot();
        assert_eq!(snap.operand1, 10);
        assert_eq!(snap.result, 30);
    }

    #[test]
    fn test_digit_guard_overflow() {
        let mut engine = engine_after("3276");
        assert_eq!(engine.snapshot().operand1, 3276);

        press(&mut engine, "0");
        assert_eq!(engine.state(), CalculatorState::Error(ErrorKind::Overflow));
        // Operand is left as it was
        assert_eq!(engine.snapshot().operand1, 3276);
    }

    #[test]
    fn test_second_operand_guard() {
        let engine = engine_after("1+99999");
        assert_eq!(engine.error_kind(), Some(ErrorKind::Overflow));
        assert_eq!(engine.snapshot().operand2, 9999);
    }

    #[test]
    fn test_largest_operand() {
        let engine = engine_after("32759");
        assert_eq!(engine.snapshot().operand1, 32759);
        assert!(engine.error_kind().is_none());
    }

    #[test]
    fn test_divide_by_zero_leaves_operands() {
        let engine = engine_after("5/0=");
        let snap = engine.snapshot();
        assert_eq!(snap.state, CalculatorState::Error(ErrorKind::DivideByZero));
        assert_eq!(snap.operand1, 5);
        assert_eq!(snap.operand2, 0);
        assert_eq!(snap.result, 0);
    }

    #[test]
    fn test_chain_overflow() {
        let engine = engine_after("32000+1000+");
        assert_eq!(engine.error_kind(), Some(ErrorKind::Overflow));
        assert_eq!(engine.snapshot().operand1, 32000);
    }

    #[test]
    fn test_error_absorbs_input() {
        let mut engine = engine_after("9/0=");
        let before = engine.snapshot();
        press(&mut engine, "12+=#");
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_clear_from_every_state() {
        for keys in ["", "12", "12+", "12+3", "12+3=", "1/0="] {
            let mut engine = engine_after(keys);
            press(&mut engine, "C");
            assert_eq!(engine.snapshot(), EngineSnapshot::default(), "after {keys:?}");
        }
    }

    #[test]
    fn test_help_does_not_change_state() {
        for keys in ["", "12", "12+", "12+3=", "1/0="] {
            let mut engine = engine_after(keys);
            let before = engine.snapshot();
            engine.process_key(Key::Help);
            assert_eq!(engine.snapshot(), before);
        }
    }

    #[test]
    fn test_negative_running_total() {
        let engine = engine_after("3-8*2=");
        assert_eq!(engine.snapshot().result, -10);
    }

    #[test]
    fn test_display_model_tracks_engine() {
        let engine = engine_after("12");
        let model = engine.current_display_model();
        assert_eq!(model.line1(), "12");
        assert_eq!(model.line2(), "Enter operation");
    }
}

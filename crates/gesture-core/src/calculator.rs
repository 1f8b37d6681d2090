//! # Gesture Calculator
//!
//! The one authoritative state machine that folds classified gesture labels
//! into a calculation.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            digit                 operator               digit           │
//! │  ┌────────────────┐   ┌────────────────┐   ┌─────────────────────┐     │
//! │  │ AwaitingFirst  │──►│ AwaitingOp     │──►│ AwaitingSecond      │──┐  │
//! │  │ Operand        │   │  digit:        │   │  operator:          │  │  │
//! │  └────────────────┘   │  overwrite 1st │   │  overwrite operator │  │  │
//! │          ▲            └────────────────┘   └─────────────────────┘  │  │
//! │          │                                                evaluate  │  │
//! │          │            ┌────────────────┐                            │  │
//! │          └── "Start" ─│ ShowingResult  │◄───────────────────────────┘  │
//! │             (from any │  everything    │                               │
//! │              phase)   │  else: no-op   │                               │
//! │                       └────────────────┘                               │
//! │                                                                         │
//! │  "Undefined" and unrecognized labels are no-ops in every phase.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! A `GestureCalculator` is a plain mutable value. Whoever owns it must make
//! sure only one caller runs `process`/`reset` on it at a time.

use crate::label::{classify_label, LabelKind};
use crate::number::{Number, Operand};
use crate::operator::{Operator, OperatorSymbol, OperatorTable};
use crate::state::{CalcResult, CalculatorState, Phase};

// =============================================================================
// Gesture Calculator
// =============================================================================

/// State machine for one calculator session.
///
/// ## Example
/// ```rust
/// use gesture_core::{CalcResult, GestureCalculator, Number, OperatorTable, Phase};
///
/// let table = OperatorTable::indonesian();
/// let mut calc = GestureCalculator::new();
///
/// calc.process("6", &table);
/// calc.process("bagi", &table);
/// let snapshot = calc.process("0", &table);
///
/// assert_eq!(snapshot.phase, Phase::ShowingResult);
/// assert_eq!(snapshot.result, Some(CalcResult::DivisionByZero));
///
/// let snapshot = calc.process("Start", &table);
/// assert!(snapshot.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GestureCalculator {
    state: CalculatorState,
}

impl GestureCalculator {
    /// Creates a calculator in the empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> CalculatorState {
        self.state.clone()
    }

    /// Status message for the current state.
    pub fn status_message(&self) -> String {
        status_message(&self.state)
    }

    /// Replaces the state with the empty state.
    pub fn reset(&mut self) -> CalculatorState {
        self.state = CalculatorState::new();
        self.snapshot()
    }

    /// Applies one classified label and returns the resulting snapshot.
    ///
    /// Never fails. Labels that do not fit the current phase leave the state
    /// unchanged.
    pub fn process(&mut self, label: &str, table: &OperatorTable) -> CalculatorState {
        let kind = classify_label(label, table);
        self.apply(kind)
    }

    /// Applies an already classified label.
    ///
    /// Lets a caller classify once (e.g. to log the kind) without looking the
    /// label up twice.
    pub fn apply(&mut self, kind: LabelKind) -> CalculatorState {
        match kind {
            LabelKind::Start => return self.reset(),
            LabelKind::Undefined | LabelKind::Unrecognized => return self.snapshot(),
            LabelKind::Digit(n) => self.accept_digit(n),
            LabelKind::Operator(symbol) => self.accept_operator(symbol),
        }
        self.snapshot()
    }

    fn accept_digit(&mut self, n: Operand) {
        match self.state.phase {
            Phase::AwaitingFirstOperand => {
                self.state.first_operand = Some(n);
                self.state.phase = Phase::AwaitingOperator;
            }
            Phase::AwaitingOperator => {
                // Correction of a misread first gesture
                self.state.first_operand = Some(n);
            }
            Phase::AwaitingSecondOperand => {
                self.state.second_operand = Some(n);
                if let (Some(first), Some(op)) = (self.state.first_operand, &self.state.operator) {
                    self.state.result = Some(evaluate(first, op, n));
                }
                self.state.phase = Phase::ShowingResult;
            }
            Phase::ShowingResult => {}
        }
    }

    fn accept_operator(&mut self, symbol: OperatorSymbol) {
        match self.state.phase {
            Phase::AwaitingOperator => {
                self.state.operator = Some(symbol);
                self.state.phase = Phase::AwaitingSecondOperand;
            }
            Phase::AwaitingSecondOperand => {
                self.state.operator = Some(symbol);
            }
            Phase::AwaitingFirstOperand | Phase::ShowingResult => {}
        }
    }
}

// =============================================================================
// Evaluation
// =============================================================================

/// Evaluates `first op second`.
///
/// ## Rules
/// - `+ - *`: integer arithmetic (real on overflow)
/// - `/`: `DivisionByZero` if `second == 0`, otherwise true division
/// - any other symbol: `InvalidOperator`
pub fn evaluate(first: Operand, op: &OperatorSymbol, second: Operand) -> CalcResult {
    match op.operator() {
        Some(Operator::Add) => CalcResult::Numeric(Number::sum(first, second)),
        Some(Operator::Subtract) => CalcResult::Numeric(Number::difference(first, second)),
        Some(Operator::Multiply) => CalcResult::Numeric(Number::product(first, second)),
        Some(Operator::Divide) => match Number::quotient(first, second) {
            Some(n) => CalcResult::Numeric(n),
            None => CalcResult::DivisionByZero,
        },
        None => CalcResult::InvalidOperator,
    }
}

// =============================================================================
// Status Message
// =============================================================================

/// Human-readable prompt describing what input is expected next.
///
/// Pure function of the phase and the captured first operand / operator.
pub fn status_message(state: &CalculatorState) -> String {
    match state.phase {
        Phase::AwaitingFirstOperand => "Please show the first number (0-9).".to_string(),
        Phase::AwaitingOperator => format!(
            "Got it: {}. Now show an operator.",
            display_or_blank(state.first_operand.map(|n| n.to_string()))
        ),
        Phase::AwaitingSecondOperand => format!(
            "OK: {} {}. Now show the second number.",
            display_or_blank(state.first_operand.map(|n| n.to_string())),
            display_or_blank(state.operator.as_ref().map(ToString::to_string))
        ),
        Phase::ShowingResult => "Calculation complete! Show 'Start' to reset.".to_string(),
    }
}

fn display_or_blank(value: Option<String>) -> String {
    value.unwrap_or_else(|| "_".to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> OperatorTable {
        OperatorTable::indonesian()
    }

    /// Feeds labels in order and returns the calculator.
    fn run(labels: &[&str]) -> GestureCalculator {
        let table = table();
        let mut calc = GestureCalculator::new();
        for label in labels {
            calc.process(label, &table);
        }
        calc
    }

    /// One representative calculator per phase.
    fn every_phase() -> Vec<GestureCalculator> {
        vec![
            run(&[]),
            run(&["5"]),
            run(&["5", "tambah"]),
            run(&["5", "tambah", "3"]),
            run(&["6", "bagi", "0"]),
        ]
    }

    #[test]
    fn test_end_to_end_scenario() {
        let table = table();
        let mut calc = GestureCalculator::new();

        let s = calc.process("5", &table);
        assert_eq!(s.phase, Phase::AwaitingOperator);
        assert_eq!(s.first_operand, Some(5));

        let s = calc.process("tambah", &table);
        assert_eq!(s.phase, Phase::AwaitingSecondOperand);
        assert_eq!(s.operator, Some(OperatorSymbol::new("+")));

        let s = calc.process("3", &table);
        assert_eq!(s.phase, Phase::ShowingResult);
        assert_eq!(s.second_operand, Some(3));
        assert_eq!(s.result, Some(CalcResult::Numeric(Number::Integer(8))));

        let s = calc.process("Start", &table);
        assert!(s.is_empty());
    }

    #[test]
    fn test_start_resets_from_any_phase() {
        let table = table();
        for mut calc in every_phase() {
            let s = calc.process("Start", &table);
            assert_eq!(s, CalculatorState::new());
            assert_eq!(calc.state().phase, Phase::AwaitingFirstOperand);
        }
    }

    #[test]
    fn test_undefined_is_noop_in_every_phase() {
        let table = table();
        for mut calc in every_phase() {
            let before = calc.snapshot();
            let after = calc.process("Undefined", &table);
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_unrecognized_labels_are_noops() {
        let table = table();
        for label in ["", "hello", "Tambah", "start", "3.5", "-1", " 5"] {
            for mut calc in every_phase() {
                let before = calc.snapshot();
                let after = calc.process(label, &table);
                assert_eq!(before, after, "label {:?} changed state", label);
            }
        }
    }

    #[test]
    fn test_operator_ignored_before_first_operand() {
        let calc = run(&["tambah"]);
        assert!(calc.state().is_empty());
    }

    #[test]
    fn test_first_operand_overwrite() {
        let table = table();
        let mut calc = run(&["5"]);
        let s = calc.process("7", &table);
        assert_eq!(s.first_operand, Some(7));
        assert_eq!(s.phase, Phase::AwaitingOperator);
    }

    #[test]
    fn test_operator_overwrite() {
        let table = table();
        let mut calc = run(&["5", "tambah"]);

        let s = calc.process("kurang", &table);
        assert_eq!(s.operator, Some(OperatorSymbol::new("-")));
        assert_eq!(s.phase, Phase::AwaitingSecondOperand);

        let s = calc.process("3", &table);
        assert_eq!(s.result, Some(CalcResult::Numeric(Number::Integer(2))));
    }

    #[test]
    fn test_division_by_zero() {
        let calc = run(&["6", "bagi", "0"]);
        assert_eq!(calc.state().phase, Phase::ShowingResult);
        assert_eq!(calc.state().result, Some(CalcResult::DivisionByZero));
    }

    #[test]
    fn test_division_is_real() {
        let calc = run(&["7", "/", "2"]);
        assert_eq!(
            calc.state().result,
            Some(CalcResult::Numeric(Number::Real(3.5)))
        );
    }

    #[test]
    fn test_multiplication_via_symbol_label() {
        let calc = run(&["4", "x", "9"]);
        assert_eq!(
            calc.state().result,
            Some(CalcResult::Numeric(Number::Integer(36)))
        );
    }

    #[test]
    fn test_invalid_operator_symbol() {
        let table: OperatorTable = [("pangkat", "^")].into_iter().collect();
        let mut calc = GestureCalculator::new();
        calc.process("2", &table);
        calc.process("pangkat", &table);
        let s = calc.process("3", &table);

        assert_eq!(s.phase, Phase::ShowingResult);
        assert_eq!(s.result, Some(CalcResult::InvalidOperator));
    }

    #[test]
    fn test_result_phase_is_closed() {
        let table = table();
        let mut calc = run(&["5", "tambah", "3"]);
        let before = calc.snapshot();

        assert_eq!(calc.process("9", &table), before);
        assert_eq!(calc.process("tambah", &table), before);
        assert_eq!(calc.process("Undefined", &table), before);

        let s = calc.process("Start", &table);
        assert_eq!(s.phase, Phase::AwaitingFirstOperand);
    }

    #[test]
    fn test_snapshot_is_a_value() {
        let table = table();
        let mut calc = GestureCalculator::new();
        let first = calc.process("5", &table);

        calc.process("7", &table);
        calc.process("kali", &table);

        assert_eq!(first.first_operand, Some(5));
        assert_eq!(first.phase, Phase::AwaitingOperator);
        assert_eq!(first.operator, None);
    }

    #[test]
    fn test_states_stay_consistent() {
        let table = table();
        let labels = ["kali", "5", "Undefined", "7", "tambah", "kurang", "3", "9", "Start", "2"];
        let mut calc = GestureCalculator::new();
        for label in labels {
            let s = calc.process(label, &table);
            assert!(s.is_consistent(), "inconsistent after {:?}: {:?}", label, s);
        }
    }

    #[test]
    fn test_reset() {
        let mut calc = run(&["5", "tambah"]);
        let s = calc.reset();
        assert!(s.is_empty());
        assert!(calc.state().is_empty());
    }

    #[test]
    fn test_evaluate() {
        let add = OperatorSymbol::new("+");
        let sub = OperatorSymbol::new("-");
        let mul = OperatorSymbol::new("*");
        let div = OperatorSymbol::new("/");

        assert_eq!(evaluate(2, &add, 3), CalcResult::Numeric(Number::Integer(5)));
        assert_eq!(evaluate(2, &sub, 3), CalcResult::Numeric(Number::Integer(-1)));
        assert_eq!(evaluate(2, &mul, 3), CalcResult::Numeric(Number::Integer(6)));
        assert_eq!(evaluate(3, &div, 2), CalcResult::Numeric(Number::Real(1.5)));
        assert_eq!(evaluate(3, &div, 0), CalcResult::DivisionByZero);
        assert_eq!(
            evaluate(3, &OperatorSymbol::new("%"), 2),
            CalcResult::InvalidOperator
        );
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            run(&[]).status_message(),
            "Please show the first number (0-9)."
        );
        assert_eq!(
            run(&["5"]).status_message(),
            "Got it: 5. Now show an operator."
        );
        assert_eq!(
            run(&["5", "kali"]).status_message(),
            "OK: 5 *. Now show the second number."
        );
        assert_eq!(
            run(&["5", "kali", "2"]).status_message(),
            "Calculation complete! Show 'Start' to reset."
        );
    }
}

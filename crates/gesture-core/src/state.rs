//! # Calculator State
//!
//! The value types the state machine hands back to callers.
//!
//! ## Phase / Field Invariant
//! ```text
//! ┌───────────────────────┬─────────┬──────────┬──────────┬──────────┐
//! │ phase                 │ first   │ operator │ second   │ result   │
//! ├───────────────────────┼─────────┼──────────┼──────────┼──────────┤
//! │ AwaitingFirstOperand  │   -     │    -     │    -     │    -     │
//! │ AwaitingOperator      │   ✓     │    -     │    -     │    -     │
//! │ AwaitingSecondOperand │   ✓     │    ✓     │    -     │    -     │
//! │ ShowingResult         │   ✓     │    ✓     │    ✓     │    ✓     │
//! └───────────────────────┴─────────┴──────────┴──────────┴──────────┘
//! ```
//!
//! ## Wire Format
//! Field and phase names follow the JSON the calculator UI already consumes:
//! ```json
//! {
//!   "current_state": "SHOWING_RESULT",
//!   "number_1": 5,
//!   "operator": "+",
//!   "number_2": 3,
//!   "result": { "kind": "numeric", "value": 8 }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::number::{Number, Operand};
use crate::operator::OperatorSymbol;

// =============================================================================
// Phase
// =============================================================================

/// Position of the calculator among its four states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Phase {
    /// Waiting for the first digit.
    #[default]
    #[serde(rename = "WAIT_FIRST_NUM")]
    AwaitingFirstOperand,
    /// First operand captured; waiting for an operator (or a corrected digit).
    #[serde(rename = "WAIT_OPERATOR")]
    AwaitingOperator,
    /// Operator captured; waiting for the second digit (or a corrected operator).
    #[serde(rename = "WAIT_SECOND_NUM")]
    AwaitingSecondOperand,
    /// Result computed. Only `Start` leaves this phase.
    #[serde(rename = "SHOWING_RESULT")]
    ShowingResult,
}

// =============================================================================
// Calculation Result
// =============================================================================

/// Outcome of evaluating `first op second`.
///
/// Division by zero and unknown operators are outcomes, not errors: the
/// calculator shows them to the user and waits for `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CalcResult {
    /// A numeric value.
    Numeric(Number),
    /// `/` with a zero divisor.
    DivisionByZero,
    /// The stored operator symbol is not one of `+ - * /`.
    InvalidOperator,
}

impl CalcResult {
    /// Returns the numeric value, if any.
    pub fn number(&self) -> Option<Number> {
        match self {
            CalcResult::Numeric(n) => Some(*n),
            CalcResult::DivisionByZero | CalcResult::InvalidOperator => None,
        }
    }

    /// Checks if this is a sentinel (non-numeric) outcome.
    pub const fn is_sentinel(&self) -> bool {
        !matches!(self, CalcResult::Numeric(_))
    }
}

impl fmt::Display for CalcResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcResult::Numeric(n) => write!(f, "{}", n),
            CalcResult::DivisionByZero => f.write_str("Error"),
            CalcResult::InvalidOperator => f.write_str("Invalid"),
        }
    }
}

// =============================================================================
// Calculator State
// =============================================================================

/// One session's calculator state.
///
/// Values of this type returned by the calculator are snapshots: they are
/// owned copies and never change after being handed out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculatorState {
    /// Current phase.
    #[serde(rename = "current_state")]
    pub phase: Phase,

    /// First operand, set once phase has left `AwaitingFirstOperand`.
    #[serde(rename = "number_1")]
    #[ts(type = "number | null")]
    pub first_operand: Option<Operand>,

    /// Operator symbol, set once phase has left `AwaitingOperator`.
    #[serde(rename = "operator")]
    pub operator: Option<OperatorSymbol>,

    /// Second operand, set when phase becomes `ShowingResult`.
    #[serde(rename = "number_2")]
    #[ts(type = "number | null")]
    pub second_operand: Option<Operand>,

    /// Evaluation outcome, set when phase becomes `ShowingResult`.
    pub result: Option<CalcResult>,
}

impl CalculatorState {
    /// Creates the empty state (`AwaitingFirstOperand`, nothing captured).
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if this is the canonical empty state.
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    /// Checks that the set fields match what the phase allows.
    ///
    /// Always true for states produced by `GestureCalculator`; useful when a
    /// state arrives from outside (e.g. deserialized from a client).
    pub fn is_consistent(&self) -> bool {
        let first = self.first_operand.is_some();
        let op = self.operator.is_some();
        let second = self.second_operand.is_some();
        let result = self.result.is_some();

        match self.phase {
            Phase::AwaitingFirstOperand => !first && !op && !second && !result,
            Phase::AwaitingOperator => first && !op && !second && !result,
            Phase::AwaitingSecondOperand => first && op && !second && !result,
            Phase::ShowingResult => first && op && second && result,
        }
    }

    /// Renders the calculation held so far.
    ///
    /// ## Example
    /// ```rust
    /// use gesture_core::{GestureCalculator, OperatorTable};
    ///
    /// let table = OperatorTable::indonesian();
    /// let mut calc = GestureCalculator::new();
    /// assert_eq!(calc.state().expression(), None);
    ///
    /// calc.process("5", &table);
    /// calc.process("tambah", &table);
    /// assert_eq!(calc.state().expression().as_deref(), Some("5 +"));
    ///
    /// calc.process("3", &table);
    /// assert_eq!(calc.state().expression().as_deref(), Some("5 + 3 = 8"));
    /// ```
    pub fn expression(&self) -> Option<String> {
        let first = self.first_operand?;
        let mut out = first.to_string();

        if let Some(op) = &self.operator {
            out.push_str(&format!(" {}", op));
        }
        if let Some(second) = self.second_operand {
            out.push_str(&format!(" {}", second));
        }
        if let Some(result) = &self.result {
            out.push_str(&format!(" = {}", result));
        }

        Some(out)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn full_state(result: CalcResult) -> CalculatorState {
        CalculatorState {
            phase: Phase::ShowingResult,
            first_operand: Some(6),
            operator: Some(OperatorSymbol::new("/")),
            second_operand: Some(0),
            result: Some(result),
        }
    }

    #[test]
    fn test_default_state_is_empty() {
        let state = CalculatorState::default();
        assert_eq!(state.phase, Phase::AwaitingFirstOperand);
        assert!(state.is_empty());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_consistency_check() {
        let state = full_state(CalcResult::DivisionByZero);
        assert!(state.is_consistent());

        let broken = CalculatorState {
            phase: Phase::AwaitingOperator,
            ..CalculatorState::new()
        };
        assert!(!broken.is_consistent());
    }

    #[test]
    fn test_sentinel_display() {
        assert_eq!(CalcResult::DivisionByZero.to_string(), "Error");
        assert_eq!(CalcResult::InvalidOperator.to_string(), "Invalid");
        assert_eq!(CalcResult::Numeric(Number::Integer(8)).to_string(), "8");
        assert!(CalcResult::DivisionByZero.is_sentinel());
        assert_eq!(CalcResult::InvalidOperator.number(), None);
    }

    #[test]
    fn test_expression_with_sentinel() {
        let state = full_state(CalcResult::DivisionByZero);
        assert_eq!(state.expression().as_deref(), Some("6 / 0 = Error"));
    }

    #[test]
    fn test_wire_format() {
        let state = CalculatorState {
            phase: Phase::ShowingResult,
            first_operand: Some(5),
            operator: Some(OperatorSymbol::new("+")),
            second_operand: Some(3),
            result: Some(CalcResult::Numeric(Number::Integer(8))),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "current_state": "SHOWING_RESULT",
                "number_1": 5,
                "operator": "+",
                "number_2": 3,
                "result": { "kind": "numeric", "value": 8 }
            })
        );

        let sentinel = serde_json::to_value(CalcResult::DivisionByZero).unwrap();
        assert_eq!(sentinel, serde_json::json!({ "kind": "division_by_zero" }));
    }

    #[test]
    fn test_empty_state_json() {
        let json = serde_json::to_value(CalculatorState::new()).unwrap();
        assert_eq!(json["current_state"], "WAIT_FIRST_NUM");
        assert!(json["number_1"].is_null());
        assert!(json["result"].is_null());
    }
}

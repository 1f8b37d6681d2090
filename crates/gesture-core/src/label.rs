//! # Label Classification
//!
//! Turns a raw classifier label into the kind of input the state machine
//! understands.
//!
//! ## Classification Order
//! ```text
//! label
//!   │
//!   ├── == "Start"       → LabelKind::Start        (reset, any phase)
//!   ├── == "Undefined"   → LabelKind::Undefined    (no-op, any phase)
//!   ├── all ASCII digits → LabelKind::Digit(n)     (if n fits in i64)
//!   ├── in OperatorTable → LabelKind::Operator(sym)
//!   └── otherwise        → LabelKind::Unrecognized (no-op)
//! ```
//!
//! Reserved labels are compared exactly (case-sensitive), matching the class
//! names the model emits.

use crate::number::Operand;
use crate::operator::{OperatorSymbol, OperatorTable};
use crate::{START_LABEL, UNDEFINED_LABEL};

/// How a label will be interpreted by the calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelKind {
    /// Reset to the empty state.
    Start,
    /// Model could not decide; leave state untouched.
    Undefined,
    /// A numeric operand.
    Digit(Operand),
    /// An operator, as mapped by the table.
    Operator(OperatorSymbol),
    /// Anything else, including the empty string.
    Unrecognized,
}

impl LabelKind {
    /// Short name for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            LabelKind::Start => "start",
            LabelKind::Undefined => "undefined",
            LabelKind::Digit(_) => "digit",
            LabelKind::Operator(_) => "operator",
            LabelKind::Unrecognized => "unrecognized",
        }
    }
}

/// Classifies a label against an operator table.
///
/// ## Example
/// ```rust
/// use gesture_core::label::{classify_label, LabelKind};
/// use gesture_core::operator::OperatorTable;
///
/// let table = OperatorTable::indonesian();
/// assert_eq!(classify_label("7", &table), LabelKind::Digit(7));
/// assert_eq!(classify_label("Start", &table), LabelKind::Start);
/// assert_eq!(classify_label("hello", &table), LabelKind::Unrecognized);
/// ```
pub fn classify_label(label: &str, table: &OperatorTable) -> LabelKind {
    if label == START_LABEL {
        return LabelKind::Start;
    }
    if label == UNDEFINED_LABEL {
        return LabelKind::Undefined;
    }

    if is_digit_label(label) {
        // Values past i64 are noise from the classifier's point of view
        return match label.parse::<Operand>() {
            Ok(n) => LabelKind::Digit(n),
            Err(_) => LabelKind::Unrecognized,
        };
    }

    match table.lookup(label) {
        Some(symbol) => LabelKind::Operator(symbol.clone()),
        None => LabelKind::Unrecognized,
    }
}

/// Checks if a label is non-empty and made only of ASCII decimal digits.
#[inline]
pub fn is_digit_label(label: &str) -> bool {
    !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit())
}

/// Checks if a label is one of the control labels handled before any
/// transition logic.
#[inline]
pub fn is_reserved_label(label: &str) -> bool {
    label == START_LABEL || label == UNDEFINED_LABEL
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_labels() {
        let table = OperatorTable::indonesian();
        assert_eq!(classify_label("Start", &table), LabelKind::Start);
        assert_eq!(classify_label("Undefined", &table), LabelKind::Undefined);

        // Case-sensitive
        assert_eq!(classify_label("start", &table), LabelKind::Unrecognized);
        assert_eq!(classify_label("UNDEFINED", &table), LabelKind::Unrecognized);
    }

    #[test]
    fn test_digit_labels() {
        let table = OperatorTable::indonesian();
        assert_eq!(classify_label("0", &table), LabelKind::Digit(0));
        assert_eq!(classify_label("9", &table), LabelKind::Digit(9));
        assert_eq!(classify_label("42", &table), LabelKind::Digit(42));
        assert_eq!(classify_label("007", &table), LabelKind::Digit(7));
    }

    #[test]
    fn test_non_digit_numbers_are_unrecognized() {
        let table = OperatorTable::indonesian();
        assert_eq!(classify_label("-3", &table), LabelKind::Unrecognized);
        assert_eq!(classify_label("3.5", &table), LabelKind::Unrecognized);
        assert_eq!(classify_label(" 3", &table), LabelKind::Unrecognized);
        assert_eq!(
            classify_label("99999999999999999999999", &table),
            LabelKind::Unrecognized
        );
    }

    #[test]
    fn test_operator_labels() {
        let table = OperatorTable::indonesian();
        assert_eq!(
            classify_label("kali", &table),
            LabelKind::Operator(OperatorSymbol::new("*"))
        );
        assert_eq!(
            classify_label("-", &table),
            LabelKind::Operator(OperatorSymbol::new("-"))
        );
    }

    #[test]
    fn test_empty_label_is_unrecognized() {
        let table = OperatorTable::indonesian();
        assert_eq!(classify_label("", &table), LabelKind::Unrecognized);
        assert!(!is_digit_label(""));
    }

    #[test]
    fn test_empty_table_has_no_operators() {
        let table = OperatorTable::new();
        assert_eq!(classify_label("tambah", &table), LabelKind::Unrecognized);
        assert_eq!(classify_label("5", &table), LabelKind::Digit(5));
    }
}

//! # Operators
//!
//! Canonical arithmetic operators and the table that maps raw gesture labels
//! onto them.
//!
//! ## From Label to Operator
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  classifier label    OperatorTable      OperatorSymbol      Operator    │
//! │  ────────────────    ─────────────      ──────────────      ────────    │
//! │  "tambah"        ──► tambah → "+"   ──► "+"             ──► Add         │
//! │  "bagi"          ──► bagi   → "/"   ──► "/"             ──► Divide      │
//! │  "x"             ──► x      → "*"   ──► "*"             ──► Multiply    │
//! │  "pangkat"       ──► pangkat→ "^"   ──► "^"             ──► (none)      │
//! │                                          │                              │
//! │                                          └── evaluated as               │
//! │                                              InvalidOperator            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table is opaque: whatever symbol it maps to is stored verbatim in the
//! calculator state. Only configuration goes through the strict
//! [`OperatorTable::try_from_pairs`] constructor.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::label::{is_digit_label, is_reserved_label};
use crate::validation::{validate_label, ValidationResult};

// =============================================================================
// Operator
// =============================================================================

/// One of the four supported arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in display order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The canonical symbol for this operator.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Parses a canonical symbol. Anything outside `+ - * /` is `None`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }
}

// =============================================================================
// Operator Symbol
// =============================================================================

/// The symbol an operator table maps a label to, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct OperatorSymbol(String);

impl OperatorSymbol {
    /// Wraps a raw symbol without checking it.
    pub fn new(symbol: impl Into<String>) -> Self {
        OperatorSymbol(symbol.into())
    }

    /// Returns the raw symbol.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the symbol to a known operator, if it is one.
    pub fn operator(&self) -> Option<Operator> {
        Operator::from_symbol(&self.0)
    }
}

impl fmt::Display for OperatorSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Operator Table
// =============================================================================

/// Mapping from raw classifier labels to operator symbols.
///
/// Keys are case- and script-specific: `"tambah"` and `"Tambah"` are
/// different labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorTable {
    entries: BTreeMap<String, OperatorSymbol>,
}

impl OperatorTable {
    /// Creates an empty table. No label is an operator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table the sign-language model was trained with: Indonesian
    /// operator words plus direct symbol classes.
    ///
    /// ## Example
    /// ```rust
    /// use gesture_core::operator::{Operator, OperatorTable};
    ///
    /// let table = OperatorTable::indonesian();
    /// let sym = table.lookup("bagi").unwrap();
    /// assert_eq!(sym.operator(), Some(Operator::Divide));
    /// assert!(table.lookup("Bagi").is_none());
    /// ```
    pub fn indonesian() -> Self {
        [
            ("tambah", Operator::Add),
            ("kurang", Operator::Subtract),
            ("kali", Operator::Multiply),
            ("bagi", Operator::Divide),
            ("+", Operator::Add),
            ("-", Operator::Subtract),
            ("x", Operator::Multiply),
            ("/", Operator::Divide),
        ]
        .into_iter()
        .map(|(label, op)| (label, op.symbol()))
        .collect()
    }

    /// Builds a table, rejecting entries that could never fire or that map to
    /// an unknown symbol.
    ///
    /// ## Rules
    /// - Label must be non-empty and at most `MAX_LABEL_LEN` characters
    /// - Label must not be `Start` / `Undefined`
    /// - Label must not be all digits
    /// - Symbol must be one of `+ - * /`
    pub fn try_from_pairs<I, K, V>(pairs: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (label, symbol) in pairs {
            let label = label.into();
            let symbol = symbol.into();

            validate_label(&label)?;
            if is_reserved_label(&label) {
                return Err(ValidationError::ReservedLabel { label });
            }
            if is_digit_label(&label) {
                return Err(ValidationError::DigitLabel { label });
            }
            if Operator::from_symbol(&symbol).is_none() {
                return Err(ValidationError::UnknownOperatorSymbol { label, symbol });
            }

            table.insert(label, symbol);
        }
        Ok(table)
    }

    /// Inserts or replaces an entry without validation.
    pub fn insert(&mut self, label: impl Into<String>, symbol: impl Into<String>) {
        self.entries
            .insert(label.into(), OperatorSymbol::new(symbol));
    }

    /// Looks up the symbol for a label.
    pub fn lookup(&self, label: &str) -> Option<&OperatorSymbol> {
        self.entries.get(label)
    }

    /// Checks if a label is an operator label.
    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OperatorSymbol)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OperatorTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (label, symbol) in iter {
            table.insert(label, symbol);
        }
        table
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol("x"), None);
        assert_eq!(Operator::from_symbol("^"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }

    #[test]
    fn test_indonesian_table() {
        let table = OperatorTable::indonesian();
        assert_eq!(table.len(), 8);
        assert_eq!(
            table.lookup("tambah").and_then(OperatorSymbol::operator),
            Some(Operator::Add)
        );
        assert_eq!(
            table.lookup("x").and_then(OperatorSymbol::operator),
            Some(Operator::Multiply)
        );
        assert!(!table.contains("TAMBAH"));
        assert!(!table.contains("Start"));
    }

    #[test]
    fn test_opaque_table_keeps_unknown_symbols() {
        let table: OperatorTable = [("pangkat", "^")].into_iter().collect();
        let sym = table.lookup("pangkat").unwrap();
        assert_eq!(sym.as_str(), "^");
        assert_eq!(sym.operator(), None);
    }

    #[test]
    fn test_try_from_pairs_accepts_valid_entries() {
        let table = OperatorTable::try_from_pairs([("plus", "+"), ("times", "*")]).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.contains("plus"));
    }

    #[test]
    fn test_try_from_pairs_rejects_bad_entries() {
        assert_eq!(
            OperatorTable::try_from_pairs([("pangkat", "^")]),
            Err(ValidationError::UnknownOperatorSymbol {
                label: "pangkat".to_string(),
                symbol: "^".to_string(),
            })
        );
        assert!(matches!(
            OperatorTable::try_from_pairs([("Start", "+")]),
            Err(ValidationError::ReservedLabel { .. })
        ));
        assert!(matches!(
            OperatorTable::try_from_pairs([("42", "+")]),
            Err(ValidationError::DigitLabel { .. })
        ));
        assert!(matches!(
            OperatorTable::try_from_pairs([("", "+")]),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_table_serializes_as_map() {
        let table = OperatorTable::try_from_pairs([("bagi", "/")]).unwrap();
        assert_eq!(serde_json::to_string(&table).unwrap(), r#"{"bagi":"/"}"#);
    }
}

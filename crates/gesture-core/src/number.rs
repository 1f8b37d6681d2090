//! # Number Module
//!
//! Provides the `Number` type for calculation results.
//!
//! ## Integer First, Real When Needed
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OPERANDS are always integers (a digit label like "7" → 7)             │
//! │                                                                         │
//! │    5 + 3  = Integer(8)       exact, stays integer                       │
//! │    5 - 9  = Integer(-4)      exact, stays integer                       │
//! │    7 / 2  = Real(3.5)        true division, always real                 │
//! │    6 / 3  = Real(2.0)        true division, always real                 │
//! │    MAX * 2 = Real(1.8e19)    integer overflow falls back to real        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gesture_core::number::Number;
//!
//! assert_eq!(Number::sum(5, 3), Number::Integer(8));
//! assert_eq!(Number::quotient(7, 2), Some(Number::Real(3.5)));
//! assert_eq!(Number::quotient(6, 0), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Operand type. Digit labels are parsed into this.
pub type Operand = i64;

// =============================================================================
// Number Type
// =============================================================================

/// A numeric calculation result.
///
/// Serialized untagged, so JSON sees a plain number (`8` or `3.5`), the same
/// shape the calculator UI has always rendered. Both variants are `number` on
/// the TypeScript side since `JSON.parse` never yields a `bigint`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum Number {
    /// Exact integer result.
    Integer(#[ts(type = "number")] i64),
    /// Real-valued result (division, or integer overflow).
    Real(f64),
}

impl Number {
    /// `a + b`, falling back to real arithmetic on overflow.
    pub fn sum(a: Operand, b: Operand) -> Self {
        a.checked_add(b)
            .map(Number::Integer)
            .unwrap_or_else(|| Number::Real(a as f64 + b as f64))
    }

    /// `a - b`, falling back to real arithmetic on overflow.
    pub fn difference(a: Operand, b: Operand) -> Self {
        a.checked_sub(b)
            .map(Number::Integer)
            .unwrap_or_else(|| Number::Real(a as f64 - b as f64))
    }

    /// `a * b`, falling back to real arithmetic on overflow.
    pub fn product(a: Operand, b: Operand) -> Self {
        a.checked_mul(b)
            .map(Number::Integer)
            .unwrap_or_else(|| Number::Real(a as f64 * b as f64))
    }

    /// True division `a / b`.
    ///
    /// Returns `None` when `b` is zero; the caller decides how to represent
    /// that (the calculator uses a `DivisionByZero` sentinel).
    pub fn quotient(a: Operand, b: Operand) -> Option<Self> {
        if b == 0 {
            return None;
        }
        Some(Number::Real(a as f64 / b as f64))
    }

    /// Returns the value as `f64` (lossy for very large integers).
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(n) => n as f64,
            Number::Real(x) => x,
        }
    }

    /// Checks if this is an exact integer result.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Real(x) => write!(f, "{}", x),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

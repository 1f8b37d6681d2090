//! # Error Types
//!
//! Domain-specific error types for gesture-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gesture-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Operator table / label validation failures     │
//! │                                                                         │
//! │  gesture-session errors (separate crate)                               │
//! │  └── SessionError     - Config, locking, session id failures           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SessionError → CLI (anyhow)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Never Errors
//! `GestureCalculator::process` and `reset` are infallible. Noisy labels,
//! division by zero and unknown operator symbols are absorbed as no-ops or
//! sentinel results. These types only guard the *strict* constructors used
//! when an operator table is loaded from configuration.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Operator table and label validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. whitespace inside an identifier).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Label collides with a reserved control label.
    ///
    /// ## When This Occurs
    /// - An operator table maps `Start` or `Undefined`; those are
    ///   intercepted before any table lookup, so the entry could never fire
    #[error("'{label}' is a reserved label and cannot be used as an operator")]
    ReservedLabel { label: String },

    /// Label consists only of digits.
    ///
    /// Digit labels are always read as operands, so such a table entry
    /// would be unreachable.
    #[error("'{label}' is a digit label and cannot be used as an operator")]
    DigitLabel { label: String },

    /// Mapped symbol is not one of `+ - * /`.
    #[error("'{label}' maps to unknown operator symbol '{symbol}' (expected one of + - * /)")]
    UnknownOperatorSymbol { label: String, symbol: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::UnknownOperatorSymbol {
            label: "pangkat".to_string(),
            symbol: "^".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'pangkat' maps to unknown operator symbol '^' (expected one of + - * /)"
        );

        let err = ValidationError::ReservedLabel {
            label: "Start".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'Start' is a reserved label and cannot be used as an operator"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "label".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

//! # Validation Module
//!
//! Input validation utilities for values that come from configuration or
//! from the request layer (operator table labels, session identifiers).
//!
//! ## Where Validation Applies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Config load (gesture-session)                                │
//! │  ├── Operator table entries  ──► OperatorTable::try_from_pairs         │
//! │  └── Default session id      ──► validate_identifier                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Per-request (gesture-session)                                │
//! │  └── Session id              ──► validate_identifier                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: State machine (THIS CRATE)                                   │
//! │  └── NO validation: every label is accepted, unknown ones are no-ops   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gesture_core::validation::{validate_identifier, validate_label};
//!
//! assert!(validate_label("tambah").is_ok());
//! assert!(validate_label("").is_err());
//! assert!(validate_identifier("session id", "default_user", 128).is_ok());
//! ```

use crate::error::ValidationError;
use crate::MAX_LABEL_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a label used as an operator table key.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Must be at most MAX_LABEL_LEN characters
///
/// Labels are NOT trimmed: `" tambah"` is a different label from `"tambah"`.
pub fn validate_label(label: &str) -> ValidationResult<()> {
    if label.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "label".to_string(),
        });
    }

    if label.chars().count() > MAX_LABEL_LEN {
        return Err(ValidationError::TooLong {
            field: "label".to_string(),
            max: MAX_LABEL_LEN,
        });
    }

    Ok(())
}

/// Validates an opaque identifier (e.g. a session id).
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Must be at most `max` characters
/// - Must not contain whitespace or control characters
pub fn validate_identifier(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not contain whitespace or control characters".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_label() {
        assert!(validate_label("tambah").is_ok());
        assert!(validate_label("+").is_ok());
        assert!(validate_label("\u{062C}\u{0645}\u{0639}").is_ok());

        assert!(validate_label("").is_err());
        assert!(validate_label("   ").is_err());
        assert!(validate_label(&"a".repeat(MAX_LABEL_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("session id", "default_user", 128).is_ok());
        assert!(validate_identifier("session id", "550e8400-e29b-41d4-a716-446655440000", 128).is_ok());

        assert_eq!(
            validate_identifier("session id", "", 128),
            Err(ValidationError::Required {
                field: "session id".to_string()
            })
        );
        assert!(validate_identifier("session id", "has space", 128).is_err());
        assert!(validate_identifier("session id", "tab\there", 128).is_err());
        assert!(validate_identifier("session id", &"a".repeat(129), 128).is_err());
    }
}

//! # Session Error Types
//!
//! Error types for the session layer.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Session Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │    Sessions     │  │     Wrapped             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │ InvalidSession- │  │  Core (gesture-core)    │ │
//! │  │  ConfigLoad-    │  │   Id            │  │  Io                     │ │
//! │  │    Failed       │  │ LockPoisoned    │  │  TomlDecode / Encode    │ │
//! │  │  ConfigSave-    │  │                 │  │                         │ │
//! │  │    Failed       │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator itself never produces an error. Everything here is about
//! the plumbing around it.

use gesture_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Session layer error type.
#[derive(Debug, Error)]
pub enum SessionError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid configuration value.
    #[error("Invalid calculator configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Session Errors
    // =========================================================================
    /// Session id failed validation.
    #[error("Invalid session id: {0}")]
    InvalidSessionId(#[source] ValidationError),

    /// A thread panicked while holding a session lock.
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// Domain error from gesture-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// File system error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("TOML parse error: {0}")]
    TomlDecode(#[from] toml::de::Error),

    /// Config could not be serialized.
    #[error("TOML serialize error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

impl SessionError {
    /// Checks if this error is a configuration problem the user can fix.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SessionError::InvalidConfig(_)
                | SessionError::ConfigLoadFailed(_)
                | SessionError::ConfigSaveFailed(_)
                | SessionError::TomlDecode(_)
                | SessionError::Core(_)
        )
    }
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::Core(CoreError::Validation(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_wraps_as_core() {
        let err: SessionError = ValidationError::Required {
            field: "label".to_string(),
        }
        .into();
        assert!(matches!(err, SessionError::Core(CoreError::Validation(_))));
        assert!(err.is_config_error());
        assert_eq!(err.to_string(), "Validation error: label is required");
    }

    #[test]
    fn test_session_id_error_message() {
        let err = SessionError::InvalidSessionId(ValidationError::Required {
            field: "session id".to_string(),
        });
        assert_eq!(err.to_string(), "Invalid session id: session id is required");
        assert!(!err.is_config_error());
    }
}

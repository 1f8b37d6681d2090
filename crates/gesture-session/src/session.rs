//! # Sessions
//!
//! One `Session` wraps one `GestureCalculator` plus the bookkeeping the
//! registry needs to evict idle sessions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use gesture_core::validation::validate_identifier;
use gesture_core::{CalculatorState, GestureCalculator, Phase};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SessionError, SessionResult};

/// Maximum session id length, in characters.
pub const MAX_SESSION_ID_LEN: usize = 128;

// =============================================================================
// Session Id
// =============================================================================

/// Opaque session key supplied by the caller (or generated).
///
/// ## Rules
/// - Non-empty, at most 128 characters
/// - No whitespace or control characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Validates and wraps a session id.
    pub fn new(id: impl Into<String>) -> SessionResult<Self> {
        let id = id.into();
        validate_identifier("session id", &id, MAX_SESSION_ID_LEN)
            .map_err(SessionError::InvalidSessionId)?;
        Ok(SessionId(id))
    }

    /// Generates a fresh random session id (UUID v4).
    pub fn generate() -> Self {
        SessionId(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SessionId {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionId::new(s)
    }
}

impl TryFrom<String> for SessionId {
    type Error = SessionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SessionId::new(value)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

// =============================================================================
// Session
// =============================================================================

/// A live calculator session.
#[derive(Debug, Clone)]
pub struct Session {
    calculator: GestureCalculator,
    created_at: DateTime<Utc>,
    last_active: DateTime<Utc>,
    /// Registry-wide activity sequence; higher is more recent.
    last_seq: u64,
    inputs: u64,
}

impl Session {
    /// Creates a session with an empty calculator.
    pub fn new(seq: u64) -> Self {
        let now = Utc::now();
        Session {
            calculator: GestureCalculator::new(),
            created_at: now,
            last_active: now,
            last_seq: seq,
            inputs: 0,
        }
    }

    /// Read access to the calculator.
    pub fn calculator(&self) -> &GestureCalculator {
        &self.calculator
    }

    /// Write access to the calculator.
    pub fn calculator_mut(&mut self) -> &mut GestureCalculator {
        &mut self.calculator
    }

    /// Records activity on this session.
    pub fn touch(&mut self, seq: u64) {
        self.last_active = Utc::now();
        self.last_seq = seq;
        self.inputs += 1;
    }

    /// Activity sequence number of the last touch.
    pub fn last_seq(&self) -> u64 {
        self.last_seq
    }

    /// Summary for listings.
    pub fn info(&self, id: &SessionId) -> SessionInfo {
        SessionInfo {
            id: id.clone(),
            phase: self.calculator.state().phase,
            created_at: self.created_at,
            last_active: self.last_active,
            inputs: self.inputs,
        }
    }

    /// Current calculator snapshot.
    pub fn snapshot(&self) -> CalculatorState {
        self.calculator.snapshot()
    }
}

/// Session summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: SessionId,
    pub phase: Phase,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    /// Labels and resets applied so far.
    pub inputs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_validation() {
        assert!(SessionId::new("default_user").is_ok());
        assert!(matches!(
            SessionId::new(""),
            Err(SessionError::InvalidSessionId(_))
        ));
        assert!(SessionId::new("a b").is_err());
        assert!(SessionId::new("x".repeat(MAX_SESSION_ID_LEN + 1)).is_err());
    }

    #[test]
    fn test_generated_ids_are_unique_and_valid() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        assert!(SessionId::new(a.as_str()).is_ok());
    }

    #[test]
    fn test_session_id_serde_validates() {
        let id: SessionId = serde_json::from_str(r#""kiosk-1""#).unwrap();
        assert_eq!(id.as_str(), "kiosk-1");
        assert!(serde_json::from_str::<SessionId>(r#""""#).is_err());
    }

    #[test]
    fn test_touch_updates_activity() {
        let mut session = Session::new(1);
        assert_eq!(session.last_seq(), 1);

        session.touch(7);
        let info = session.info(&SessionId::new("s").unwrap());
        assert_eq!(session.last_seq(), 7);
        assert_eq!(info.inputs, 1);
        assert!(info.last_active >= info.created_at);
        assert_eq!(info.phase, Phase::AwaitingFirstOperand);
    }
}

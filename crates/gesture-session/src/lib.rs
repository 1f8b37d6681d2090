//! # gesture-session: Session Layer for the Gesture Calculator
//!
//! Owns the session-to-calculator mapping, configuration and logging that the
//! pure `gesture-core` crate leaves to its caller.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Request Flow                                        │
//! │                                                                         │
//! │  classifier label + session id                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  SessionRegistry::process(id, label)                             │  │
//! │  │    1. classify label (debug log, unrecognized surfaced)          │  │
//! │  │    2. find/create session, evict LRU when at capacity            │  │
//! │  │    3. lock session, run GestureCalculator                        │  │
//! │  │    4. log phase change / completed calculation                   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  DetectionResponse { session_id, detected_class, state, message }      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//! ```rust
//! use gesture_session::{SessionConfig, SessionId, SessionRegistry};
//!
//! let config = SessionConfig::default();
//! let registry = SessionRegistry::from_config(&config).unwrap();
//! let id = SessionId::new(config.session.default_id.as_str()).unwrap();
//!
//! registry.process(&id, "5").unwrap();
//! registry.process(&id, "tambah").unwrap();
//! let response = registry.process(&id, "3").unwrap();
//!
//! assert_eq!(response.expression.as_deref(), Some("5 + 3 = 8"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod registry;
pub mod response;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{SessionConfig, SessionSettings, DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_ID};
pub use error::{SessionError, SessionResult};
pub use registry::SessionRegistry;
pub use response::DetectionResponse;
pub use session::{Session, SessionId, SessionInfo};

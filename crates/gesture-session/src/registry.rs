//! # Session Registry
//!
//! Maps session ids to calculator sessions and serializes access per session.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Two-Level Locking                                    │
//! │                                                                         │
//! │  process("kiosk-1", "5")                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────┐                                      │
//! │  │ sessions: Mutex<HashMap<..>> │  held only to find / insert / evict  │
//! │  └──────────────┬───────────────┘                                      │
//! │                 │ Arc<Mutex<Session>> (cloned out, map lock released)  │
//! │                 ▼                                                       │
//! │  ┌──────────────────────────────┐                                      │
//! │  │ Mutex<Session>               │  held while the state machine runs   │
//! │  └──────────────────────────────┘                                      │
//! │                                                                         │
//! │  Lock order is always map → session, and the map lock is never taken   │
//! │  while a session lock is held. Independent sessions never contend.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Eviction
//! A session whose `Arc` has been cloned out of the map is checked out: some
//! caller is between `get_or_create` and releasing its session lock. Clones
//! are only taken under the map lock, so a strong count of 1 seen under the
//! map lock means nobody can be working on that session. Only such sessions
//! are eviction candidates. When every session is checked out the registry
//! grows past `max_sessions` until one is released.
//!
//! ## Why Not RwLock?
//! Almost every call mutates its session, and transitions take microseconds.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, TryLockError};

use gesture_core::{classify_label, CalculatorState, LabelKind, OperatorTable};
use tracing::{debug, info};

use crate::config::{SessionConfig, DEFAULT_MAX_SESSIONS};
use crate::error::{SessionError, SessionResult};
use crate::response::DetectionResponse;
use crate::session::{Session, SessionId, SessionInfo};

type SharedSession = Arc<Mutex<Session>>;

/// Registry of live calculator sessions.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, SharedSession>>,
    operators: OperatorTable,
    max_sessions: usize,
    seq: AtomicU64,
}

impl SessionRegistry {
    /// Creates an empty registry.
    ///
    /// A `max_sessions` of 0 is treated as 1.
    pub fn new(operators: OperatorTable, max_sessions: usize) -> Self {
        SessionRegistry {
            sessions: Mutex::new(HashMap::new()),
            operators,
            max_sessions: max_sessions.max(1),
            seq: AtomicU64::new(0),
        }
    }

    /// Creates a registry from validated configuration.
    pub fn from_config(config: &SessionConfig) -> SessionResult<Self> {
        let operators = config.operator_table()?;
        info!(
            operators = operators.len(),
            max_sessions = config.session.max_sessions,
            "Session registry initialized"
        );
        Ok(Self::new(operators, config.session.max_sessions))
    }

    /// The operator table every session uses.
    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// Applies one classified label to a session, creating it on first use.
    pub fn process(&self, id: &SessionId, label: &str) -> SessionResult<DetectionResponse> {
        let kind = classify_label(label, &self.operators);
        debug!(session = %id, label, kind = kind.name(), "Processing label");

        if kind == LabelKind::Unrecognized {
            // Absorbed by the state machine; surfaced here for diagnosis only
            debug!(session = %id, label, "Ignoring unrecognized label");
        }

        let state = self.with_session_mut(id, |session| {
            let before = session.calculator().state().phase;
            let state = session.calculator_mut().apply(kind);

            if state.phase != before {
                info!(session = %id, from = ?before, to = ?state.phase, "Phase changed");
                if let (Some(result), Some(expr)) = (&state.result, state.expression()) {
                    info!(
                        session = %id,
                        expression = %expr,
                        sentinel = result.is_sentinel(),
                        "Calculation complete"
                    );
                }
            }
            state
        })?;

        Ok(DetectionResponse::new(id.clone(), label, state))
    }

    /// Resets a session to the empty state, creating it if needed.
    pub fn reset(&self, id: &SessionId) -> SessionResult<DetectionResponse> {
        let state = self.with_session_mut(id, |session| session.calculator_mut().reset())?;
        info!(session = %id, "Session reset");
        Ok(DetectionResponse::new(id.clone(), gesture_core::START_LABEL, state))
    }

    /// Snapshot of a session, if it exists. Does not create or touch it.
    pub fn snapshot(&self, id: &SessionId) -> SessionResult<Option<CalculatorState>> {
        let Some(shared) = self.lock_map()?.get(id).cloned() else {
            return Ok(None);
        };
        let session = lock_session(&shared)?;
        Ok(Some(session.snapshot()))
    }

    /// Removes a session. Returns whether it existed.
    pub fn remove(&self, id: &SessionId) -> SessionResult<bool> {
        let removed = self.lock_map()?.remove(id).is_some();
        if removed {
            info!(session = %id, "Session removed");
        }
        Ok(removed)
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> SessionResult<usize> {
        Ok(self.lock_map()?.len())
    }

    /// Summaries of all live sessions, most recently active first.
    pub fn sessions(&self) -> SessionResult<Vec<SessionInfo>> {
        let entries: Vec<(SessionId, SharedSession)> = self
            .lock_map()?
            .iter()
            .map(|(id, shared)| (id.clone(), Arc::clone(shared)))
            .collect();

        let mut infos = Vec::with_capacity(entries.len());
        for (id, shared) in entries {
            let session = lock_session(&shared)?;
            infos.push((session.last_seq(), session.info(&id)));
        }
        infos.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(infos.into_iter().map(|(_, info)| info).collect())
    }

    /// Runs `f` with exclusive access to a session, creating it if needed.
    ///
    /// ## Usage
    /// ```rust
    /// use gesture_session::{SessionId, SessionRegistry};
    ///
    /// let registry = SessionRegistry::default();
    /// let id = SessionId::new("kiosk-1").unwrap();
    /// let phase = registry
    ///     .with_session_mut(&id, |s| s.calculator().state().phase)
    ///     .unwrap();
    /// assert_eq!(phase, gesture_core::Phase::AwaitingFirstOperand);
    /// ```
    pub fn with_session_mut<F, R>(&self, id: &SessionId, f: F) -> SessionResult<R>
    where
        F: FnOnce(&mut Session) -> R,
    {
        let shared = self.get_or_create(id)?;
        let mut session = lock_session(&shared)?;
        session.touch(self.next_seq());
        Ok(f(&mut session))
    }

    fn get_or_create(&self, id: &SessionId) -> SessionResult<SharedSession> {
        let mut sessions = self.lock_map()?;
        if let Some(shared) = sessions.get(id) {
            return Ok(Arc::clone(shared));
        }

        while sessions.len() >= self.max_sessions {
            match least_recently_active(&sessions) {
                Some(victim) => {
                    sessions.remove(&victim);
                    info!(session = %victim, "Evicted least recently active session");
                }
                None => break,
            }
        }

        let shared = Arc::new(Mutex::new(Session::new(self.next_seq())));
        sessions.insert(id.clone(), Arc::clone(&shared));
        debug!(session = %id, live = sessions.len(), "Session created");
        Ok(shared)
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn lock_map(&self) -> SessionResult<MutexGuard<'_, HashMap<SessionId, SharedSession>>> {
        self.sessions
            .lock()
            .map_err(|_| SessionError::LockPoisoned("session map".to_string()))
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(OperatorTable::indonesian(), DEFAULT_MAX_SESSIONS)
    }
}

fn lock_session(shared: &SharedSession) -> SessionResult<MutexGuard<'_, Session>> {
    shared
        .lock()
        .map_err(|_| SessionError::LockPoisoned("session".to_string()))
}

/// Picks the eviction victim. Checked-out sessions are skipped; poisoned ones
/// go first.
///
/// Must be called with the map lock held.
fn least_recently_active(sessions: &HashMap<SessionId, SharedSession>) -> Option<SessionId> {
    sessions
        .iter()
        .filter(|(_, shared)| Arc::strong_count(shared) == 1)
        .filter_map(|(id, shared)| match shared.try_lock() {
            Ok(session) => Some((session.last_seq(), id)),
            Err(TryLockError::Poisoned(_)) => Some((0, id)),
            Err(TryLockError::WouldBlock) => None,
        })
        .min_by_key(|(seq, _)| *seq)
        .map(|(_, id)| id.clone())
}

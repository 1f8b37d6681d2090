//! # Calculator Configuration
//!
//! Configuration for the session layer: which labels are operators and how
//! sessions are managed.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     GESTURE_DEFAULT_SESSION=kiosk-1                                    │
//! │     GESTURE_MAX_SESSIONS=64                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/calculator/calculator.toml (Linux)                       │
//! │     ~/Library/Application Support/com.gesture.calculator/... (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     default_user session, 1024 sessions, Indonesian operator table     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # calculator.toml
//! [session]
//! default_id = "default_user"
//! max_sessions = 1024
//!
//! [operators]
//! tambah = "+"
//! kurang = "-"
//! kali = "*"
//! bagi = "/"
//! "+" = "+"
//! ```
//!
//! Leaving out `[operators]` keeps the built-in Indonesian table. Writing an
//! `[operators]` section replaces it entirely.

use std::collections::BTreeMap;
use std::path::PathBuf;

use gesture_core::validation::validate_identifier;
use gesture_core::OperatorTable;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{SessionError, SessionResult};
use crate::session::MAX_SESSION_ID_LEN;

/// Session id used when a caller does not name one.
pub const DEFAULT_SESSION_ID: &str = "default_user";

/// Default cap on live sessions.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "calculator.toml";

// =============================================================================
// Session Settings
// =============================================================================

/// Session management settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Session used when none is given.
    #[serde(default = "default_session_id")]
    pub default_id: String,

    /// Maximum live sessions before the least recently active is evicted.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

fn default_session_id() -> String {
    DEFAULT_SESSION_ID.to_string()
}

fn default_max_sessions() -> usize {
    DEFAULT_MAX_SESSIONS
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_id: default_session_id(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_operators() -> BTreeMap<String, String> {
    OperatorTable::indonesian()
        .iter()
        .map(|(label, symbol)| (label.to_string(), symbol.to_string()))
        .collect()
}

// =============================================================================
// Session Config
// =============================================================================

/// Complete calculator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session management settings.
    #[serde(default)]
    pub session: SessionSettings,

    /// Label → operator symbol entries.
    #[serde(default = "default_operators")]
    pub operators: BTreeMap<String, String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session: SessionSettings::default(),
            operators: default_operators(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (calculator.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> SessionResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading calculator config from file");
                let contents = std::fs::read_to_string(&path).map_err(|e| {
                    SessionError::ConfigLoadFailed(format!("{}: {}", path.display(), e))
                })?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load calculator config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file, creating parent directories.
    pub fn save(&self, config_path: Option<PathBuf>) -> SessionResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| SessionError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Calculator config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SessionResult<()> {
        validate_identifier("session.default_id", &self.session.default_id, MAX_SESSION_ID_LEN)?;

        if self.session.max_sessions == 0 {
            return Err(SessionError::InvalidConfig(
                "session.max_sessions must be greater than 0".into(),
            ));
        }

        let table = self.operator_table()?;
        if table.is_empty() {
            warn!("Operator table is empty; no label will be read as an operator");
        }

        Ok(())
    }

    /// Builds the validated operator table.
    pub fn operator_table(&self) -> SessionResult<OperatorTable> {
        Ok(OperatorTable::try_from_pairs(
            self.operators
                .iter()
                .map(|(label, symbol)| (label.as_str(), symbol.as_str())),
        )?)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a key lookup.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(id) = lookup("GESTURE_DEFAULT_SESSION") {
            debug!(session = %id, "Overriding default session from environment");
            self.session.default_id = id;
        }

        if let Some(max) = lookup("GESTURE_MAX_SESSIONS") {
            match max.parse::<usize>() {
                Ok(n) => {
                    debug!(max_sessions = n, "Overriding max sessions from environment");
                    self.session.max_sessions = n;
                }
                Err(_) => warn!(value = %max, "Ignoring unparseable GESTURE_MAX_SESSIONS"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "gesture", "calculator")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

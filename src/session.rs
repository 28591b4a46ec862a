//! Saved-session support: the navigation stack is persisted as a flat
//! ordered list of destination identifiers and restored verbatim on startup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::nav::Destination;

/// Errors that can occur when loading or saving the session file.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write session file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize session: {source}")]
    SerializeError {
        #[source]
        source: toml::ser::Error,
    },
}

/// On-disk snapshot of the navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub stack: Vec<Destination>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            stack: vec![Destination::Welcome],
        }
    }
}

impl SessionState {
    /// Returns the path to the session file.
    ///
    /// Uses `~/.config/bloom/session.toml` on Unix/macOS, or equivalent on
    /// other platforms via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn session_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("bloom").join("session.toml")
    }

    /// Loads the session from the default session file.
    ///
    /// - If the file doesn't exist, returns `SessionState::default()`.
    /// - If the file exists, parses it as TOML and validates the stack.
    /// - Returns an error if reading or parsing fails.
    pub fn load() -> Result<Self, SessionError> {
        Self::load_from(&Self::session_path())
    }

    /// Loads the session from an explicit path. See [`SessionState::load`].
    pub fn load_from(path: &Path) -> Result<Self, SessionError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SessionError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let session: SessionState =
            toml::from_str(&content).map_err(|e| SessionError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        if !session.is_valid() {
            tracing::warn!(path = %path.display(), "Rejecting invalid saved stack, starting fresh");
            return Ok(Self::default());
        }

        Ok(session)
    }

    /// A saved stack is usable only if it upholds the navigator invariants:
    /// never empty, and rooted at the Welcome screen.
    pub fn is_valid(&self) -> bool {
        self.stack.first() == Some(&Destination::Welcome)
    }

    /// Saves the session to the default session file.
    pub fn save(&self) -> Result<(), SessionError> {
        self.save_to(&Self::session_path())
    }

    /// Saves the session to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| SessionError::SerializeError { source: e })?;

        fs::write(path, content).map_err(|e| SessionError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

//! Player preferences
//!
//! The last selected mode and difficulty, in a form a host can persist
//! (LocalStorage, a config file). The core never stores them itself.

use serde::{Deserialize, Serialize};

use crate::session::GameSession;
use crate::sim::state::{Difficulty, Mode};

/// Persistable preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub mode: Mode,
    pub difficulty: Difficulty,
}

impl Preferences {
    /// Capture the current selection of a session
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            mode: session.mode(),
            difficulty: session.difficulty(),
        }
    }

    /// Restore the selection onto a session
    pub fn apply(&self, session: &mut GameSession) {
        session.set_mode(self.mode);
        session.set_difficulty(self.difficulty);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse stored preferences, falling back to defaults when missing or corrupt
    pub fn load(stored: Option<&str>) -> Self {
        match stored.map(Self::from_json) {
            Some(Ok(prefs)) => {
                log::info!(
                    "Loaded preferences: {} / {}",
                    prefs.mode.as_str(),
                    prefs.difficulty.as_str()
                );
                prefs
            }
            Some(Err(e)) => {
                log::warn!("Ignoring corrupt preferences: {e}");
                Self::default()
            }
            None => {
                log::info!("Using default preferences");
                Self::default()
            }
        }
    }
}

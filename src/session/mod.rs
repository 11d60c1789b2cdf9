//! Login session persistence.
//!
//! The role and the optional display name live in a small key-value file
//! under the config directory. The session is loaded once per invocation in
//! `run()` and handed to command handlers as an explicit context value;
//! nothing below the dispatcher reads it ad hoc.

use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const ROLE_KEY: &str = "role";
const NAME_KEY: &str = "display_name";

/// Ephemeral process-wide session state.
#[derive(Debug, Clone)]
pub struct Session {
    pub role: Role,
    pub display_name: Option<String>,
}

impl Session {
    /// Identity recorded on punches marked during this session.
    pub fn recorder_identity(&self) -> String {
        match self.role {
            Role::Admin => "Admin".to_string(),
            Role::Security => self
                .display_name
                .clone()
                .unwrap_or_else(|| "Security".to_string()),
        }
    }
}

/// Key-value file holding the session (`get`/`set`/`clear` semantics).
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    /// Read the current session, if any. A missing file means logged out.
    pub fn current(&self) -> AppResult<Option<Session>> {
        let entries = read_entries(&self.path)?;

        let Some(role_str) = entries.get(ROLE_KEY) else {
            return Ok(None);
        };

        let role = Role::from_str(role_str)
            .ok_or_else(|| AppError::Session(format!("unknown role '{role_str}'")))?;

        Ok(Some(Session {
            role,
            display_name: entries.get(NAME_KEY).cloned(),
        }))
    }

    /// Persist a new session (login).
    pub fn save(&self, session: &Session) -> AppResult<()> {
        let mut entries = BTreeMap::new();
        entries.insert(ROLE_KEY.to_string(), session.role.as_str().to_string());
        if let Some(name) = &session.display_name {
            entries.insert(NAME_KEY.to_string(), name.clone());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&entries)
            .map_err(|e| AppError::Session(format!("failed to serialize session: {e}")))?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }

    /// Clear the session (logout). Idempotent.
    pub fn clear(&self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

fn read_entries(path: &Path) -> AppResult<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content)
        .map_err(|e| AppError::Session(format!("failed to parse session file: {e}")))
}

/// Require any logged-in session.
pub fn require_login(session: &Option<Session>) -> AppResult<&Session> {
    session.as_ref().ok_or(AppError::NotLoggedIn)
}

/// Require an admin session.
pub fn require_admin(session: &Option<Session>) -> AppResult<&Session> {
    let s = require_login(session)?;
    if s.role.is_admin() {
        Ok(s)
    } else {
        Err(AppError::AdminRequired)
    }
}

//! Durable admin session store.
//!
//! The backend issues no token; "logged in" is simply the presence of
//! the identity triple the login call returned. The store persists
//! those three fields as a small JSON file so a new process picks the
//! session back up, and removes the file atomically on logout.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use ledgerdesk_core::AdminSession;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reading or writing the session file.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("session file is corrupt: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One persisted field of the session triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionField {
    AdminId,
    AdminLevel,
    AdminName,
}

#[derive(Serialize, Deserialize)]
struct StoredSession {
    #[serde(flatten)]
    session: AdminSession,
    /// Unix timestamp of the login that produced this session.
    saved_at: i64,
}

/// File-backed session store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store over the given file path. Nothing is read until
    /// [`load`](Self::load) is called.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Persist the session triple atomically (temp file + rename).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the file cannot be written.
    pub fn save(&self, session: &AdminSession) -> Result<(), SessionError> {
        let stored = StoredSession {
            session: session.clone(),
            saved_at: chrono::Utc::now().timestamp(),
        };
        let json = serde_json::to_string_pretty(&stored)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Load the stored session, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Parse` for a corrupt file; a missing
    /// file is simply `Ok(None)`.
    pub fn load(&self) -> Result<Option<AdminSession>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let stored: StoredSession = serde_json::from_str(&raw)?;
        Ok(Some(stored.session))
    }

    /// Read a single persisted field.
    ///
    /// # Errors
    ///
    /// Propagates [`load`](Self::load) failures.
    pub fn field(&self, field: SessionField) -> Result<Option<String>, SessionError> {
        Ok(self.load()?.map(|session| match field {
            SessionField::AdminId => session.admin_id,
            SessionField::AdminLevel => session.admin_level.code().to_string(),
            SessionField::AdminName => session.admin_name,
        }))
    }

    /// Remove all persisted fields. Removing an absent session is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the file exists but cannot be
    /// removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// True iff a session with a non-empty admin id is stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.load()
            .ok()
            .flatten()
            .is_some_and(|session| !session.admin_id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerdesk_core::AdminLevel;

    fn temp_store(name: &str) -> SessionStore {
        let mut path = std::env::temp_dir();
        path.push(format!("ledgerdesk-session-test-{name}-{}", std::process::id()));
        path.push("session.json");
        let store = SessionStore::new(path);
        store.clear().unwrap();
        store
    }

    fn session() -> AdminSession {
        AdminSession {
            admin_id: "ops1".to_string(),
            admin_level: AdminLevel::Operations,
            admin_name: "Jordan".to_string(),
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = temp_store("round-trip");
        store.save(&session()).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, session());
        assert!(store.is_authenticated());

        store.clear().unwrap();
    }

    #[test]
    fn test_field_reads() {
        let store = temp_store("fields");
        store.save(&session()).unwrap();

        assert_eq!(
            store.field(SessionField::AdminId).unwrap().as_deref(),
            Some("ops1")
        );
        assert_eq!(
            store.field(SessionField::AdminLevel).unwrap().as_deref(),
            Some("O")
        );
        assert_eq!(
            store.field(SessionField::AdminName).unwrap().as_deref(),
            Some("Jordan")
        );

        store.clear().unwrap();
    }

    #[test]
    fn test_clear_removes_all_fields() {
        let store = temp_store("clear");
        store.save(&session()).unwrap();
        store.clear().unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.field(SessionField::AdminId).unwrap(), None);
        assert_eq!(store.field(SessionField::AdminLevel).unwrap(), None);
        assert_eq!(store.field(SessionField::AdminName).unwrap(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = temp_store("idempotent");
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(!store.is_authenticated());
    }
}

//! Authentication gate for protected commands.
//!
//! The CLI equivalent of a protected-route boundary: every command
//! other than login passes through [`require_auth`] and is redirected
//! to the login flow when no session is stored.

use ledgerdesk_core::AdminSession;
use thiserror::Error;

use crate::session::{SessionError, SessionStore};

/// Why a protected command was not allowed to run.
#[derive(Debug, Error)]
pub enum GuardError {
    /// No admin session is stored; the caller should log in first.
    #[error("not logged in; run `ldesk login` first")]
    AuthRequired,
    /// The session store itself failed.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Return the stored admin session or refuse entry.
///
/// # Errors
///
/// Returns [`GuardError::AuthRequired`] when no session (or one with
/// an empty admin id) is stored, and propagates store failures.
pub fn require_auth(store: &SessionStore) -> Result<AdminSession, GuardError> {
    let session = store.load()?.ok_or(GuardError::AuthRequired)?;
    if session.admin_id.is_empty() {
        return Err(GuardError::AuthRequired);
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerdesk_core::AdminLevel;

    fn temp_store(name: &str) -> SessionStore {
        let mut path = std::env::temp_dir();
        path.push(format!("ledgerdesk-guard-test-{name}-{}", std::process::id()));
        path.push("session.json");
        let store = SessionStore::new(path);
        store.clear().unwrap();
        store
    }

    #[test]
    fn test_guard_refuses_without_session() {
        let store = temp_store("refuse");
        assert!(matches!(
            require_auth(&store),
            Err(GuardError::AuthRequired)
        ));
    }

    #[test]
    fn test_guard_passes_with_session() {
        let store = temp_store("pass");
        store
            .save(&AdminSession {
                admin_id: "sys1".to_string(),
                admin_level: AdminLevel::System,
                admin_name: "Sam".to_string(),
            })
            .unwrap();

        let session = require_auth(&store).unwrap();
        assert_eq!(session.admin_id, "sys1");

        store.clear().unwrap();
    }
}

//! Session commands: login, logout, whoami.
//!
//! # Environment Variables
//!
//! - `LEDGERDESK_API_URL` - Base URL of the backend call endpoint
//! - `LEDGERDESK_SESSION_FILE` - Session file path (optional)

use std::io::{self, BufRead, Write};

use ledgerdesk_console::{
    ConfigError, ConsoleConfig, Gateway, GatewayError, GuardError, SessionError, SessionStore,
    require_auth,
};
use thiserror::Error;

/// Errors that can occur during session commands.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The login call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The session file could not be read or written.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// No stored session.
    #[error(transparent)]
    Guard(#[from] GuardError),

    /// Reading credentials from the terminal failed.
    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),
}

/// Authenticate against the backend and persist the session.
pub async fn login(id: Option<String>) -> Result<(), AuthError> {
    let config = ConsoleConfig::from_env()?;
    let gateway = Gateway::new(&config);
    let store = SessionStore::new(config.session_path);

    let admin_id = match id {
        Some(id) => id,
        None => prompt("Admin id: ")?,
    };
    let admin_pass = prompt("Password: ")?;

    let session = gateway.login(&admin_id, &admin_pass).await?;
    store.save(&session)?;

    tracing::info!(admin_id = %session.admin_id, "logged in");
    println!(
        "Logged in as {} ({})",
        session.admin_name,
        session.admin_level.label()
    );
    Ok(())
}

/// Remove the stored session. Succeeds even when none exists.
pub fn logout() -> Result<(), AuthError> {
    let config = ConsoleConfig::from_env()?;
    let store = SessionStore::new(config.session_path);
    store.clear()?;
    println!("Logged out.");
    Ok(())
}

/// Print the stored session.
pub fn whoami() -> Result<(), AuthError> {
    let config = ConsoleConfig::from_env()?;
    let store = SessionStore::new(config.session_path);
    let session = require_auth(&store)?;
    println!(
        "{} <{}> - {}",
        session.admin_name,
        session.admin_id,
        session.admin_level.label()
    );
    Ok(())
}

fn prompt(label: &str) -> Result<String, io::Error> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

//! Ledgerdesk Console - core library for the back-office console.
//!
//! Everything the console does is a thin layer over a remote
//! procedure-style API with a fixed `head`/`body` envelope routed by a
//! transaction code. This crate owns that layer:
//!
//! - [`gateway`] - the single chokepoint for all backend calls
//! - [`session`] - durable admin session store
//! - [`guard`] - authentication gate for protected commands
//! - [`master`] - session-lifetime reference data (symbols, products,
//!   exchanges) loaded once with join-all semantics
//! - [`list`] - generic search/page/select list controller
//! - [`screen`] - the user-management screen over [`list`] and the
//!   deposit/withdraw listing
//! - [`editor`] - the tabbed user detail editor with per-pane
//!   dirty tracking and independent saves
//!
//! # Shared state
//!
//! Nothing here is a global. The [`gateway::Gateway`] and the loaded
//! [`master::MasterData`] are created once after login and passed by
//! reference (or `Arc`) to every consumer; both are read-only after
//! construction, so no locking is needed. Per-screen state (list rows,
//! editable drafts) is exclusively owned by its controller.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod editor;
pub mod gateway;
pub mod guard;
pub mod list;
pub mod master;
pub mod notice;
pub mod screen;
pub mod session;

pub use config::{ConfigError, ConsoleConfig};
pub use gateway::{Gateway, GatewayError};
pub use guard::{GuardError, require_auth};
pub use master::{MasterData, MasterError};
pub use session::{SessionError, SessionField, SessionStore};

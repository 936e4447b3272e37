//! Ledgerdesk Core - Shared types library.
//!
//! This crate provides the row and domain types used across all
//! Ledgerdesk components:
//! - `console` - Console core library (gateway, session, controllers)
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Row
//! types mirror the backend wire format field-for-field so they can be
//! moved through the call envelope without conversion layers.
//!
//! # Modules
//!
//! - [`types`] - Admin identity, user/account/asset/agreement rows, and
//!   master reference rows

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

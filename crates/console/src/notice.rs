//! User-facing notice strings.
//!
//! Kept in one place so every screen reports the same wording for the
//! same condition.

// Common
pub const NO_DATA: &str = "No rows matched the query.";
pub const NO_CHANGES: &str = "Nothing changed; no update was sent.";
pub const FAILED_GET_MASTER_DATA: &str = "Failed to load master reference data.";

// User management
pub const FAILED_GET_USERS: &str = "Failed to load user records.";
pub const FAILED_GET_USER_ACCOUNT: &str = "Failed to load the user's accounts.";
pub const FAILED_GET_USER_HOLDINGS: &str = "Failed to load the user's holdings.";
pub const FAILED_GET_USER_OFFERS: &str = "Failed to load the user's offering subscriptions.";
pub const FAILED_GET_USER_AGREEMENTS: &str = "Failed to load the user's agreements.";

// Deposit/withdraw management
pub const FAILED_GET_TRANSACTIONS: &str = "Failed to load transaction records.";

pub const UPDATED_USER_INFORMATION: &str = "User profile updated.";
pub const UPDATED_USER_ACCOUNT: &str = "Account updated.";
pub const REGISTERED_USER_ACCOUNT: &str = "Account registered.";
pub const UPDATED_USER_AGREEMENT: &str = "Agreement updated.";

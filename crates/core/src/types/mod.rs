//! Shared domain and wire-row types.
//!
//! Enum types carry their one-character wire codes through serde
//! renames, so a deserialized row compares and re-serializes exactly as
//! the backend sent it. Fields that the backend may omit on partial
//! responses are `Option` - the editor's dirty check treats an absent
//! field as "no change", never as a difference.

mod account;
mod admin;
mod agreement;
mod asset;
mod master;
mod transaction;
mod user;

pub use account::AccountRecord;
pub use admin::{AdminLevel, AdminSession};
pub use agreement::AgreementRecord;
pub use asset::{HoldingRecord, OfferRecord};
pub use master::{ExchangeRow, ProductRow, SymbolRow};
pub use transaction::TransactionRecord;
pub use user::{QualGrade, RiskGrade, UserRecord, UserStatus};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for parsing a wire code into one of the enum types below.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} code: {code}")]
pub struct ParseCodeError {
    /// Which enum the code was parsed for.
    pub kind: &'static str,
    /// The rejected input.
    pub code: String,
}

/// A Y/N flag as the backend encodes booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "N")]
    No,
}

impl Flag {
    /// True iff the flag is `Y`.
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    /// The single-character wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Yes => "Y",
            Self::No => "N",
        }
    }

    /// Invert the flag.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wire_codes() {
        assert_eq!(serde_json::to_string(&Flag::Yes).ok().as_deref(), Some("\"Y\""));
        let parsed: Flag = serde_json::from_str("\"N\"").unwrap();
        assert_eq!(parsed, Flag::No);
    }

    #[test]
    fn test_flag_toggled() {
        assert_eq!(Flag::Yes.toggled(), Flag::No);
        assert_eq!(Flag::No.toggled(), Flag::Yes);
        assert!(Flag::Yes.is_yes());
        assert!(!Flag::No.is_yes());
    }
}

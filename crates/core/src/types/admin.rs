//! Admin identity types.

use serde::{Deserialize, Serialize};

use super::ParseCodeError;

/// Admin permission level, as returned by the login call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdminLevel {
    /// Full system administration.
    #[serde(rename = "S")]
    System,
    /// Day-to-day operations.
    #[serde(rename = "O")]
    Operations,
    /// Customer support staff.
    #[serde(rename = "C")]
    Support,
}

impl AdminLevel {
    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::System => "System administrator",
            Self::Operations => "Operations administrator",
            Self::Support => "Customer support administrator",
        }
    }

    /// The single-character wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::System => "S",
            Self::Operations => "O",
            Self::Support => "C",
        }
    }

    /// Parse a wire code.
    ///
    /// # Errors
    ///
    /// Returns `ParseCodeError` for anything other than `S`, `O`, `C`.
    pub fn from_code(code: &str) -> Result<Self, ParseCodeError> {
        match code {
            "S" => Ok(Self::System),
            "O" => Ok(Self::Operations),
            "C" => Ok(Self::Support),
            other => Err(ParseCodeError {
                kind: "admin level",
                code: other.to_string(),
            }),
        }
    }
}

/// The authenticated admin's identity.
///
/// Returned by the login call and persisted by the session store; its
/// presence is what "authenticated" means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    /// Admin login id.
    pub admin_id: String,
    /// Permission level.
    pub admin_level: AdminLevel,
    /// Display name.
    pub admin_name: String,
}

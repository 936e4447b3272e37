//! Bank account row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One trading account linked to a user.
///
/// An empty `acnt_cd` is the "not yet created" sentinel: the account
/// editor uses it for the blank new-account draft, and the save path
/// branches on it (register vs update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccountRecord {
    /// Account code; empty string until the account is registered.
    #[serde(default)]
    pub acnt_cd: String,
    /// Bank of the linked external account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// Linked external account number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acnt_linked: Option<String>,
    /// Deposit balance (server-computed, read-only).
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub deposit_amt: Option<Decimal>,
    /// Transaction qualification limit (editable).
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub qual_limit: Option<Decimal>,
}

impl AccountRecord {
    /// True while the account exists only as a local draft.
    #[must_use]
    pub fn is_unregistered(&self) -> bool {
        self.acnt_cd.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amounts_parse_from_strings() {
        let json = r#"{"acnt_cd":"A001","bank_code":"088","acnt_linked":"110-234","deposit_amt":"1500000","qual_limit":"5000000"}"#;
        let account: AccountRecord = serde_json::from_str(json).unwrap();
        assert_eq!(account.deposit_amt, Some(Decimal::from(1_500_000)));
        assert_eq!(account.qual_limit, Some(Decimal::from(5_000_000)));
        assert!(!account.is_unregistered());
    }

    #[test]
    fn test_empty_code_is_unregistered() {
        let account = AccountRecord::default();
        assert!(account.is_unregistered());
    }
}

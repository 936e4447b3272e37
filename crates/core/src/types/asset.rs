//! Read-only asset rows: listed-symbol holdings and public-offering
//! subscriptions.
//!
//! Both row kinds reuse the server-supplied `next_key` cursor value as
//! their presentation identity, matching the backend's contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One listed-symbol position held by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HoldingRecord {
    /// Symbol display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_name: Option<String>,
    /// Symbol code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_code: Option<String>,
    /// Held quantity.
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub trade_pos_qty: Option<Decimal>,
    /// Pagination cursor, doubling as the row id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_key: Option<String>,
}

/// One public-offering subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OfferRecord {
    /// Offering display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_name: Option<String>,
    /// Offered ticker code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker_code: Option<String>,
    /// Subscribed quantity.
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub offer_quantity: Option<Decimal>,
    /// Offering status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_used: Option<String>,
    /// Pagination cursor, doubling as the row id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holding_row_parses() {
        let json = r#"{"symbol_name":"Acme","symbol_code":"ACM","trade_pos_qty":"42","next_key":"H0042"}"#;
        let row: HoldingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(row.trade_pos_qty, Some(Decimal::from(42)));
        assert_eq!(row.next_key.as_deref(), Some("H0042"));
    }
}

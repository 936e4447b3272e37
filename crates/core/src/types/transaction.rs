//! Deposit/withdraw transaction row.
//!
//! Unlike the enveloped rows, transactions come from a plain REST
//! resource and use camelCase field names on the wire.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One deposit or withdrawal request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Server-assigned row id.
    pub id: i64,
    /// Date the customer filed the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_date: Option<String>,
    /// Date the request was processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_date: Option<String>,
    /// Deposit or withdrawal.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Account the money moved through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Transaction amount; a JSON number on the wire.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    /// Processing status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_row_parses_camel_case() {
        let json = r#"{
            "id": 31,
            "requestDate": "2025-03-02",
            "processDate": "2025-03-03",
            "type": "withdraw",
            "accountNumber": "110-234-567890",
            "amount": 250000,
            "status": "done"
        }"#;
        let row: TransactionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, 31);
        assert_eq!(row.kind.as_deref(), Some("withdraw"));
        assert_eq!(row.account_number.as_deref(), Some("110-234-567890"));
        assert_eq!(row.amount, Some(Decimal::from(250_000)));
    }

    #[test]
    fn test_partial_transaction_row_parses() {
        let row: TransactionRecord = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert_eq!(row.id, 1);
        assert_eq!(row.amount, None);
        assert_eq!(row.status, None);
    }
}

//! Master (reference) data rows: symbols, products, exchanges.
//!
//! These load once per session and back O(1) code lookups on every
//! screen. Key shapes match the backend: symbols key as
//! `<exchange_code>.<symbol_code>`, products and exchanges by their
//! single code.

use serde::{Deserialize, Serialize};

/// One tradable symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRow {
    /// Exchange the symbol lists on.
    pub exchange_code: String,
    /// Symbol code within the exchange.
    pub symbol_code: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_name: Option<String>,
    /// Product the symbol belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
}

impl SymbolRow {
    /// Map key: `<exchange_code>.<symbol_code>`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}.{}", self.exchange_code, self.symbol_code)
    }
}

/// One product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    /// Product code (map key).
    pub product_code: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

/// One exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRow {
    /// Exchange code (map key).
    pub exchange_code: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_name: Option<String>,
}

//! Master reference cache.
//!
//! Three reference datasets - symbols, products, exchanges - load once
//! per session, concurrently, with join-all semantics: the cache is
//! ready only when all three fetches succeed, and a single failure
//! blocks the entire protected area rather than exposing partial
//! reference data. After load the cache is immutable and shared as an
//! `Arc` by every screen; there is no invalidation, refresh, or TTL.

use std::collections::HashMap;
use std::sync::Arc;

use ledgerdesk_core::{ExchangeRow, ProductRow, SymbolRow};
use thiserror::Error;

use crate::gateway::{Gateway, GatewayError};

/// Master load failure. Any one of the three fetches failing produces
/// this; no partially-populated cache ever escapes.
#[derive(Debug, Error)]
#[error("failed to load master reference data: {0}")]
pub struct MasterError(#[source] pub GatewayError);

/// The three reference mappings, keyed for O(1) lookup.
#[derive(Debug, Default)]
pub struct MasterData {
    symbols: HashMap<String, SymbolRow>,
    products: HashMap<String, ProductRow>,
    exchanges: HashMap<String, ExchangeRow>,
}

impl MasterData {
    /// Fetch all three reference datasets concurrently and fold them
    /// into lookup maps.
    ///
    /// # Errors
    ///
    /// Returns [`MasterError`] if any of the three fetches fails.
    pub async fn load(gateway: &Gateway) -> Result<Arc<Self>, MasterError> {
        let (symbols, products, exchanges) = tokio::try_join!(
            gateway.fetch_symbol_master(),
            gateway.fetch_product_master(),
            gateway.fetch_exchange_master(),
        )
        .map_err(MasterError)?;

        Ok(Arc::new(Self::from_rows(symbols, products, exchanges)))
    }

    /// Fold raw reference rows into the keyed maps.
    ///
    /// Duplicate keys resolve last-write-wins in response order, so a
    /// later row silently supersedes an earlier one.
    #[must_use]
    pub fn from_rows(
        symbols: Vec<SymbolRow>,
        products: Vec<ProductRow>,
        exchanges: Vec<ExchangeRow>,
    ) -> Self {
        Self {
            symbols: symbols.into_iter().map(|row| (row.key(), row)).collect(),
            products: products
                .into_iter()
                .map(|row| (row.product_code.clone(), row))
                .collect(),
            exchanges: exchanges
                .into_iter()
                .map(|row| (row.exchange_code.clone(), row))
                .collect(),
        }
    }

    /// Look up a symbol by exchange and symbol code.
    #[must_use]
    pub fn symbol(&self, exchange_code: &str, symbol_code: &str) -> Option<&SymbolRow> {
        self.symbols.get(&format!("{exchange_code}.{symbol_code}"))
    }

    /// Look up a product by code.
    #[must_use]
    pub fn product(&self, product_code: &str) -> Option<&ProductRow> {
        self.products.get(product_code)
    }

    /// Look up an exchange by code.
    #[must_use]
    pub fn exchange(&self, exchange_code: &str) -> Option<&ExchangeRow> {
        self.exchanges.get(exchange_code)
    }

    /// Count of loaded (symbols, products, exchanges).
    #[must_use]
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.symbols.len(), self.products.len(), self.exchanges.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(exchange: &str, code: &str, name: &str) -> SymbolRow {
        SymbolRow {
            exchange_code: exchange.to_string(),
            symbol_code: code.to_string(),
            symbol_name: Some(name.to_string()),
            product_code: None,
        }
    }

    #[test]
    fn test_fold_keys_lookups() {
        let master = MasterData::from_rows(
            vec![symbol("KRX", "005930", "Samsung Electronics")],
            vec![ProductRow {
                product_code: "EQ".to_string(),
                product_name: Some("Equity".to_string()),
            }],
            vec![ExchangeRow {
                exchange_code: "KRX".to_string(),
                exchange_name: Some("Korea Exchange".to_string()),
            }],
        );

        assert!(master.symbol("KRX", "005930").is_some());
        assert!(master.symbol("KRX", "000000").is_none());
        assert!(master.product("EQ").is_some());
        assert!(master.exchange("KRX").is_some());
        assert_eq!(master.counts(), (1, 1, 1));
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let master = MasterData::from_rows(
            vec![
                symbol("KRX", "005930", "Old name"),
                symbol("KRX", "005930", "New name"),
            ],
            Vec::new(),
            Vec::new(),
        );

        let row = master.symbol("KRX", "005930").unwrap();
        assert_eq!(row.symbol_name.as_deref(), Some("New name"));
        assert_eq!(master.counts().0, 1);
    }
}

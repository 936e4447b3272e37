//! Master reference fetches: symbols, products, exchanges.

use ledgerdesk_core::{ExchangeRow, ProductRow, SymbolRow};
use tracing::instrument;

use super::{ENDPOINT_PRODUCT, EmptyInput, Gateway, GatewayError};

impl Gateway {
    /// Fetch the full symbol master.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or is rejected.
    #[instrument(skip(self))]
    pub async fn fetch_symbol_master(&self) -> Result<Vec<SymbolRow>, GatewayError> {
        self.call(ENDPOINT_PRODUCT, "sym_mst", EmptyInput {}).await
    }

    /// Fetch the full product master.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or is rejected.
    #[instrument(skip(self))]
    pub async fn fetch_product_master(&self) -> Result<Vec<ProductRow>, GatewayError> {
        self.call(ENDPOINT_PRODUCT, "prod_mst", EmptyInput {}).await
    }

    /// Fetch the full exchange master.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or is rejected.
    #[instrument(skip(self))]
    pub async fn fetch_exchange_master(&self) -> Result<Vec<ExchangeRow>, GatewayError> {
        self.call(ENDPOINT_PRODUCT, "exchange_mst", EmptyInput {})
            .await
    }
}

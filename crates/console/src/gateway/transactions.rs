//! Deposit/withdraw transaction listing.
//!
//! The one call that does not use the trcode envelope: transactions
//! are a plain REST resource (`GET /transactions`) beside the call
//! endpoint, filtered through query parameters.

use ledgerdesk_core::TransactionRecord;
use serde::Serialize;
use tracing::instrument;

use super::{Gateway, GatewayError, map_transport};

/// Query filters for the transaction listing. Empty strings mean
/// "no filter" and are sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    /// Customer display name, substring match.
    pub customer_name: String,
    /// Inclusive range start, `YYYY-MM-DD`.
    pub start_date: String,
    /// Inclusive range end, `YYYY-MM-DD`.
    pub end_date: String,
}

impl Gateway {
    /// Fetch deposit/withdraw transactions matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or is rejected.
    #[instrument(skip(self))]
    pub async fn fetch_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<TransactionRecord>, GatewayError> {
        let url = format!(
            "{}/transactions",
            self.inner.api_url.as_str().trim_end_matches('/')
        );

        let response = self
            .inner
            .client
            .get(url)
            .query(filter)
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Rejected {
                trcode: "transactions".to_string(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(map_transport)
    }
}

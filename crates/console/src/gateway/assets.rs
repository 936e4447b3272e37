//! Read-only asset calls: listed-symbol positions and public-offering
//! subscriptions.

use ledgerdesk_core::{HoldingRecord, OfferRecord};
use serde::Serialize;
use tracing::instrument;

use super::{ENDPOINT_PRODUCT, Gateway, GatewayError};

#[derive(Serialize)]
struct HoldingsInput<'a> {
    user_uid: &'a str,
    acnt_cd: &'a str,
}

#[derive(Serialize)]
struct UserKeyInput<'a> {
    user_uid: &'a str,
}

impl Gateway {
    /// Fetch the user's listed-symbol positions for one account.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or is rejected.
    #[instrument(skip(self))]
    pub async fn fetch_holdings(
        &self,
        user_uid: &str,
        acnt_cd: &str,
    ) -> Result<Vec<HoldingRecord>, GatewayError> {
        self.call(
            ENDPOINT_PRODUCT,
            "ad_pos_get",
            HoldingsInput { user_uid, acnt_cd },
        )
        .await
    }

    /// Fetch the user's public-offering subscriptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or is rejected.
    #[instrument(skip(self))]
    pub async fn fetch_offers(&self, user_uid: &str) -> Result<Vec<OfferRecord>, GatewayError> {
        self.call(
            ENDPOINT_PRODUCT,
            "ad_offer_user_get",
            UserKeyInput { user_uid },
        )
        .await
    }
}

//! Admin login call.

use ledgerdesk_core::AdminSession;
use serde::Serialize;
use tracing::instrument;

use super::{ENDPOINT_USER, Gateway, GatewayError};

#[derive(Serialize)]
struct LoginInput<'a> {
    admin_id: &'a str,
    admin_pass: &'a str,
}

impl Gateway {
    /// Authenticate an admin and return the backend-issued identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails, is rejected, or returns no
    /// identity row.
    #[instrument(skip(self, admin_pass), fields(admin_id = %admin_id))]
    pub async fn login(
        &self,
        admin_id: &str,
        admin_pass: &str,
    ) -> Result<AdminSession, GatewayError> {
        let rows: Vec<AdminSession> = self
            .call(
                ENDPOINT_USER,
                "ad_admin_login",
                LoginInput {
                    admin_id,
                    admin_pass,
                },
            )
            .await?;

        rows.into_iter().next().ok_or(GatewayError::EmptyReply {
            trcode: "ad_admin_login",
        })
    }
}

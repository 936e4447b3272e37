//! Account fetch, register, and update calls.

use ledgerdesk_core::AccountRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{AckRow, ENDPOINT_PRODUCT, Gateway, GatewayError};

/// The account fetch nests its rows one level down:
/// `OutBlock1[0].acnt_list`.
#[derive(Deserialize)]
struct AccountListRow {
    #[serde(default)]
    acnt_list: Vec<AccountRecord>,
}

#[derive(Serialize)]
struct UserKeyInput<'a> {
    user_uid: &'a str,
}

/// Fields sent by `ad_acnt_reg` when creating an account.
///
/// The qualification limit goes out as a JSON number, per the backend
/// contract.
#[derive(Serialize)]
pub struct AccountRegisterInput<'a> {
    pub user_uid: &'a str,
    pub bank_code: &'a str,
    pub acnt_linked: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    pub qual_limit: Decimal,
}

#[derive(Serialize)]
struct AccountUpdateInput<'a> {
    user_uid: &'a str,
    acnt_cd: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    qual_limit: Decimal,
}

impl Gateway {
    /// Fetch the user's account list.
    ///
    /// A user with no accounts yields an empty vec.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or is rejected.
    #[instrument(skip(self))]
    pub async fn fetch_accounts(&self, user_uid: &str) -> Result<Vec<AccountRecord>, GatewayError> {
        let rows: Vec<AccountListRow> = self
            .call(ENDPOINT_PRODUCT, "ad_acnt_get", UserKeyInput { user_uid })
            .await?;

        Ok(rows
            .into_iter()
            .next()
            .map_or_else(Vec::new, |row| row.acnt_list))
    }

    /// Register a new account for the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or is rejected.
    #[instrument(skip(self, input), fields(user_uid = %input.user_uid))]
    pub async fn register_account(
        &self,
        input: AccountRegisterInput<'_>,
    ) -> Result<(), GatewayError> {
        let _rows: Vec<AckRow> = self.call(ENDPOINT_PRODUCT, "ad_acnt_reg", input).await?;
        Ok(())
    }

    /// Update an existing account's qualification limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or is rejected.
    #[instrument(skip(self))]
    pub async fn update_account(
        &self,
        user_uid: &str,
        acnt_cd: &str,
        qual_limit: Decimal,
    ) -> Result<(), GatewayError> {
        let _rows: Vec<AckRow> = self
            .call(
                ENDPOINT_PRODUCT,
                "ad_acnt_upd",
                AccountUpdateInput {
                    user_uid,
                    acnt_cd,
                    qual_limit,
                },
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_input_sends_limit_as_number() {
        let input = AccountRegisterInput {
            user_uid: "U1",
            bank_code: "088",
            acnt_linked: "110-234-567890",
            qual_limit: Decimal::from(5_000_000),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json["qual_limit"].is_number());
        assert_eq!(json["bank_code"], "088");
    }

    #[test]
    fn test_account_list_row_unnests() {
        let raw = r#"{"acnt_list":[{"acnt_cd":"A001"},{"acnt_cd":"A002"}]}"#;
        let row: AccountListRow = serde_json::from_str(raw).unwrap();
        assert_eq!(row.acnt_list.len(), 2);

        let empty: AccountListRow = serde_json::from_str("{}").unwrap();
        assert!(empty.acnt_list.is_empty());
    }
}

//! User search, profile update, and agreement calls.

use ledgerdesk_core::{AgreementRecord, Flag, QualGrade, RiskGrade, UserRecord, UserStatus};
use serde::Serialize;
use tracing::instrument;

use super::{AckRow, ENDPOINT_USER, Gateway, GatewayError};

#[derive(Serialize)]
struct UserSearchInput<'a> {
    search_word: &'a str,
    /// `None` on a fresh search; serialized as `null`, matching the
    /// backend contract.
    next_key: Option<&'a str>,
}

/// The editable profile fields sent by `ad_user_upd`.
///
/// Borrowed from the edited [`UserRecord`]; fields the editor never
/// touched stay absent from the wire row.
#[derive(Serialize)]
pub struct UserUpdateInput<'a> {
    user_uid: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_birth: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_tel: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_used: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tend_grade: Option<RiskGrade>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tend_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    qual_grade: Option<QualGrade>,
}

impl<'a> From<&'a UserRecord> for UserUpdateInput<'a> {
    fn from(user: &'a UserRecord) -> Self {
        Self {
            user_uid: &user.user_uid,
            user_name: user.user_name.as_deref(),
            user_birth: user.user_birth.as_deref(),
            user_tel: user.user_tel.as_deref(),
            user_email: user.user_email.as_deref(),
            user_used: user.user_used,
            tend_grade: user.tend_grade,
            tend_date: user.tend_date.as_deref(),
            qual_grade: user.qual_grade,
        }
    }
}

#[derive(Serialize)]
struct UserKeyInput<'a> {
    user_uid: &'a str,
}

#[derive(Serialize)]
struct AgreementUpdateInput<'a> {
    user_uid: &'a str,
    terms_code: &'a str,
    terms_type: &'a str,
    terms_agree: Flag,
}

impl Gateway {
    /// Fetch one page of users matching `search_word`.
    ///
    /// Pass the previous page's cursor as `next_key` to continue a
    /// search; `None` starts from the beginning.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or is rejected.
    #[instrument(skip(self))]
    pub async fn search_users(
        &self,
        search_word: &str,
        next_key: Option<&str>,
    ) -> Result<Vec<UserRecord>, GatewayError> {
        self.call(
            ENDPOINT_USER,
            "ad_user_get",
            UserSearchInput {
                search_word,
                next_key,
            },
        )
        .await
    }

    /// Update a user's profile fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or is rejected.
    #[instrument(skip(self, user), fields(user_uid = %user.user_uid))]
    pub async fn update_user(&self, user: &UserRecord) -> Result<(), GatewayError> {
        let _rows: Vec<AckRow> = self
            .call(ENDPOINT_USER, "ad_user_upd", UserUpdateInput::from(user))
            .await?;
        Ok(())
    }

    /// Fetch a user's terms-of-service agreement rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or is rejected.
    #[instrument(skip(self))]
    pub async fn fetch_agreements(
        &self,
        user_uid: &str,
    ) -> Result<Vec<AgreementRecord>, GatewayError> {
        self.call(ENDPOINT_USER, "ad_agree_get", UserKeyInput { user_uid })
            .await
    }

    /// Update a single agreement row's agree flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or is rejected.
    #[instrument(skip(self))]
    pub async fn update_agreement(
        &self,
        user_uid: &str,
        terms_code: &str,
        terms_type: &str,
        terms_agree: Flag,
    ) -> Result<(), GatewayError> {
        let _rows: Vec<AckRow> = self
            .call(
                ENDPOINT_USER,
                "ad_agree_upd",
                AgreementUpdateInput {
                    user_uid,
                    terms_code,
                    terms_type,
                    terms_agree,
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
    fn test_update_input_skips_untouched_fields() {
        let user = UserRecord {
            user_uid: "U77".to_string(),
            user_name: Some("Lee".to_string()),
            ..UserRecord::default()
        };
        let json = serde_json::to_value(UserUpdateInput::from(&user)).unwrap();
        assert_eq!(json["user_uid"], "U77");
        assert_eq!(json["user_name"], "Lee");
        assert!(json.get("user_email").is_none());
        // read-only fields never appear in the update row
        assert!(json.get("user_ci").is_none());
        assert!(json.get("rtime").is_none());
    }
}

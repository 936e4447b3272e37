//! Entity detail editor: a tabbed editor over one selected user.
//!
//! Four panes - Profile, Account, Assets, Agreements - share one
//! discipline: fetched state is snapshotted as "clean", edits touch
//! only the editable clone, and each pane saves independently. The
//! profile pane is pre-loaded from the list row that opened the
//! editor; every other tab refetches its data on entry, every time.
//!
//! Dropping (or replacing) the editor discards all in-progress edits
//! unconditionally - there is no confirm-discard step.

pub mod account;
pub mod agreements;
pub mod assets;
pub mod draft;

use ledgerdesk_core::{Flag, QualGrade, RiskGrade, UserRecord, UserStatus};
use thiserror::Error;

use crate::gateway::{AccountRegisterInput, Gateway, GatewayError};

use account::{AccountField, AccountPane, AccountSaveAction, AccountSelection};
use agreements::AgreementsPane;
use assets::{AssetView, AssetsPane};
use draft::Draft;

/// Editor tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Profile,
    Account,
    Assets,
    Agreements,
}

impl Tab {
    /// Parse a tab name as typed at the console.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "profile" => Some(Self::Profile),
            "account" => Some(Self::Account),
            "assets" => Some(Self::Assets),
            "agreements" => Some(Self::Agreements),
            _ => None,
        }
    }
}

/// What a save request accomplished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Profile update accepted; the returned record is the new clean
    /// baseline, for patching the parent list's cached row.
    ProfileSaved(UserRecord),
    /// New account registered.
    AccountRegistered,
    /// Existing account updated.
    AccountUpdated,
    /// Dirty check found nothing to send - a notice, not an error.
    NoChanges,
}

/// Editor operation failures.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Another operation is still in flight.
    #[error("another operation is still in progress")]
    Busy,

    /// The active tab has no save action.
    #[error("this tab is read-only")]
    ReadOnlyTab,

    /// Required account fields are missing.
    #[error("bank code, linked account number, and limit are all required")]
    ValidationFailed,

    /// Account code not present in the fetched list.
    #[error("no such account: {0}")]
    UnknownAccount(String),

    /// Agreement key not present in the fetched rows.
    #[error("no such agreement: {terms_code}-{terms_type}")]
    UnknownAgreement {
        terms_code: String,
        terms_type: String,
    },

    /// Required agreements cannot be toggled from the console.
    #[error("required agreements cannot be toggled")]
    RequiredAgreement,

    /// Unrecognized field name for the active tab.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A field value that does not parse.
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    /// The backend call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Tabbed detail editor over one user record.
#[derive(Debug)]
pub struct UserEditor {
    user: UserRecord,
    tab: Tab,
    busy: bool,
    profile: Draft<UserRecord>,
    account: AccountPane,
    assets: AssetsPane,
    agreements: AgreementsPane,
}

impl UserEditor {
    /// Open the editor on a list row. The profile pane snapshots the
    /// row as clean; the other panes fetch on first tab entry.
    #[must_use]
    pub fn open(user: UserRecord) -> Self {
        Self {
            profile: Draft::new(user.clone()),
            user,
            tab: Tab::Profile,
            busy: false,
            account: AccountPane::default(),
            assets: AssetsPane::default(),
            agreements: AgreementsPane::default(),
        }
    }

    /// The user the editor was opened on.
    #[must_use]
    pub const fn user(&self) -> &UserRecord {
        &self.user
    }

    /// The active tab.
    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    /// The profile draft.
    #[must_use]
    pub const fn profile(&self) -> &Draft<UserRecord> {
        &self.profile
    }

    /// The account pane.
    #[must_use]
    pub const fn account(&self) -> &AccountPane {
        &self.account
    }

    /// The assets pane.
    #[must_use]
    pub const fn assets(&self) -> &AssetsPane {
        &self.assets
    }

    /// The agreements pane.
    #[must_use]
    pub const fn agreements(&self) -> &AgreementsPane {
        &self.agreements
    }

    /// Switch tabs. Every tab except Profile refetches its data on
    /// entry; the tab switches even when that fetch fails, leaving the
    /// pane with whatever it last held.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Busy`] while another operation runs, or
    /// the gateway failure from the entry fetch.
    pub async fn select_tab(&mut self, gateway: &Gateway, tab: Tab) -> Result<(), EditorError> {
        self.begin()?;
        self.tab = tab;
        let result = self.fetch_tab(gateway, tab).await;
        self.busy = false;
        result
    }

    /// Set one editable profile field from console input.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownField`] for read-only or unknown
    /// fields and [`EditorError::InvalidValue`] for unparseable codes.
    pub fn set_profile_field(&mut self, name: &str, value: &str) -> Result<(), EditorError> {
        let edited = self.profile.edited_mut();
        match name {
            "user_name" => edited.user_name = Some(value.to_string()),
            "user_birth" => edited.user_birth = Some(value.to_string()),
            "user_tel" => edited.user_tel = Some(value.to_string()),
            "user_email" => edited.user_email = Some(value.to_string()),
            "tend_date" => edited.tend_date = Some(value.to_string()),
            "user_used" => {
                edited.user_used =
                    Some(
                        UserStatus::from_code(value).map_err(|_| EditorError::InvalidValue {
                            field: "user_used",
                            value: value.to_string(),
                        })?,
                    );
            }
            "tend_grade" => {
                edited.tend_grade =
                    Some(
                        RiskGrade::from_code(value).map_err(|_| EditorError::InvalidValue {
                            field: "tend_grade",
                            value: value.to_string(),
                        })?,
                    );
            }
            "qual_grade" => {
                edited.qual_grade =
                    Some(
                        QualGrade::from_code(value).map_err(|_| EditorError::InvalidValue {
                            field: "qual_grade",
                            value: value.to_string(),
                        })?,
                    );
            }
            other => return Err(EditorError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    /// Select an account (or the blank new-account draft).
    ///
    /// # Errors
    ///
    /// See [`AccountPane::select`].
    pub fn select_account(&mut self, selection: AccountSelection) -> Result<(), EditorError> {
        self.account.select(selection)
    }

    /// Set one editable account field from console input.
    ///
    /// # Errors
    ///
    /// See [`AccountPane::set_field`].
    pub fn set_account_field(&mut self, field: AccountField, value: &str) -> Result<(), EditorError> {
        self.account.set_field(field, value)
    }

    /// Switch the assets view and refetch that dataset.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Busy`] while another operation runs, or
    /// the gateway failure from the refetch.
    pub async fn set_asset_view(
        &mut self,
        gateway: &Gateway,
        view: AssetView,
    ) -> Result<(), EditorError> {
        self.begin()?;
        self.assets.set_view(view);
        let result = self.fetch_assets(gateway).await;
        self.busy = false;
        result
    }

    /// Toggle one agreement row. The update call goes out first; local
    /// state changes only after the backend accepts it, so a failure
    /// leaves the row exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns the pane's validation errors, [`EditorError::Busy`], or
    /// the gateway failure.
    pub async fn toggle_agreement(
        &mut self,
        gateway: &Gateway,
        terms_code: &str,
        terms_type: &str,
    ) -> Result<Flag, EditorError> {
        self.begin()?;
        let result = self
            .toggle_agreement_inner(gateway, terms_code, terms_type)
            .await;
        self.busy = false;
        result
    }

    /// Save the active tab.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ReadOnlyTab`] for the Assets and
    /// Agreements tabs, [`EditorError::ValidationFailed`] when
    /// required account fields are missing, [`EditorError::Busy`]
    /// while another operation runs, or the gateway failure.
    pub async fn save(&mut self, gateway: &Gateway) -> Result<SaveOutcome, EditorError> {
        self.begin()?;
        let result = match self.tab {
            Tab::Profile => self.save_profile(gateway).await,
            Tab::Account => self.save_account(gateway).await,
            Tab::Assets | Tab::Agreements => Err(EditorError::ReadOnlyTab),
        };
        self.busy = false;
        result
    }

    const fn begin(&mut self) -> Result<(), EditorError> {
        if self.busy {
            return Err(EditorError::Busy);
        }
        self.busy = true;
        Ok(())
    }

    async fn fetch_tab(&mut self, gateway: &Gateway, tab: Tab) -> Result<(), EditorError> {
        match tab {
            Tab::Profile => Ok(()),
            Tab::Account => {
                let accounts = gateway.fetch_accounts(&self.user.user_uid).await?;
                self.account.load(accounts);
                Ok(())
            }
            Tab::Assets => self.fetch_assets(gateway).await,
            Tab::Agreements => {
                let rows = gateway.fetch_agreements(&self.user.user_uid).await?;
                self.agreements.load(rows);
                Ok(())
            }
        }
    }

    async fn fetch_assets(&mut self, gateway: &Gateway) -> Result<(), EditorError> {
        match self.assets.view() {
            AssetView::Holdings => {
                // Position lookups are account-scoped; the selected
                // account's code goes along (empty for the new-account
                // draft).
                let acnt_cd = match self.account.selection() {
                    AccountSelection::Existing(code) => code.clone(),
                    AccountSelection::New => String::new(),
                };
                let rows = gateway
                    .fetch_holdings(&self.user.user_uid, &acnt_cd)
                    .await?;
                self.assets.load_holdings(rows);
            }
            AssetView::Offers => {
                let rows = gateway.fetch_offers(&self.user.user_uid).await?;
                self.assets.load_offers(rows);
            }
        }
        Ok(())
    }

    async fn toggle_agreement_inner(
        &mut self,
        gateway: &Gateway,
        terms_code: &str,
        terms_type: &str,
    ) -> Result<Flag, EditorError> {
        let target = self.agreements.toggle_target(terms_code, terms_type)?;
        gateway
            .update_agreement(&self.user.user_uid, terms_code, terms_type, target)
            .await?;
        self.agreements.apply(terms_code, terms_type, target);
        Ok(target)
    }

    async fn save_profile(&mut self, gateway: &Gateway) -> Result<SaveOutcome, EditorError> {
        if !self.profile.is_dirty() {
            return Ok(SaveOutcome::NoChanges);
        }
        gateway.update_user(self.profile.edited()).await?;
        self.profile.commit();
        Ok(SaveOutcome::ProfileSaved(self.profile.clean().clone()))
    }

    async fn save_account(&mut self, gateway: &Gateway) -> Result<SaveOutcome, EditorError> {
        if !self.account.validate() {
            return Err(EditorError::ValidationFailed);
        }

        let outcome = match self.account.save_action() {
            AccountSaveAction::Register => {
                // No dirty gate here: the blank clean baseline means a
                // filled-in draft compares as "absent on one side", so
                // the register branch saves unconditionally once the
                // required fields validate.
                let edited = self.account.draft().edited();
                let (Some(bank_code), Some(acnt_linked), Some(qual_limit)) = (
                    edited.bank_code.as_deref(),
                    edited.acnt_linked.as_deref(),
                    edited.qual_limit,
                ) else {
                    return Err(EditorError::ValidationFailed);
                };
                gateway
                    .register_account(AccountRegisterInput {
                        user_uid: &self.user.user_uid,
                        bank_code,
                        acnt_linked,
                        qual_limit,
                    })
                    .await?;
                SaveOutcome::AccountRegistered
            }
            AccountSaveAction::Update => {
                if !self.account.draft().is_dirty() {
                    return Ok(SaveOutcome::NoChanges);
                }
                let edited = self.account.draft().edited();
                let Some(qual_limit) = edited.qual_limit else {
                    return Err(EditorError::ValidationFailed);
                };
                gateway
                    .update_account(&self.user.user_uid, &edited.acnt_cd, qual_limit)
                    .await?;
                SaveOutcome::AccountUpdated
            }
        };

        // Either branch refetches the list and reselects the first
        // entry.
        let accounts = gateway.fetch_accounts(&self.user.user_uid).await?;
        self.account.load(accounts);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserRecord {
        UserRecord {
            user_uid: "U1".to_string(),
            user_name: Some("Kim".to_string()),
            user_used: Some(UserStatus::Active),
            ..UserRecord::default()
        }
    }

    #[test]
    fn test_open_snapshots_profile_clean() {
        let editor = UserEditor::open(user());
        assert_eq!(editor.tab(), Tab::Profile);
        assert!(!editor.profile().is_dirty());
        assert_eq!(editor.profile().clean().user_uid, "U1");
    }

    #[test]
    fn test_profile_field_edits_only_touch_the_clone() {
        let mut editor = UserEditor::open(user());
        editor.set_profile_field("user_name", "Lee").unwrap();
        assert_eq!(editor.profile().clean().user_name.as_deref(), Some("Kim"));
        assert_eq!(editor.profile().edited().user_name.as_deref(), Some("Lee"));
        assert!(editor.profile().is_dirty());
    }

    #[test]
    fn test_profile_enum_fields_parse_codes() {
        let mut editor = UserEditor::open(user());
        editor.set_profile_field("user_used", "N").unwrap();
        editor.set_profile_field("tend_grade", "4").unwrap();
        editor.set_profile_field("qual_grade", "3").unwrap();

        let edited = editor.profile().edited();
        assert_eq!(edited.user_used, Some(UserStatus::Suspended));
        assert_eq!(edited.tend_grade, Some(RiskGrade::ActiveInvestment));
        assert_eq!(edited.qual_grade, Some(QualGrade::Professional));

        assert!(matches!(
            editor.set_profile_field("user_used", "Q"),
            Err(EditorError::InvalidValue { .. })
        ));
        assert!(matches!(
            editor.set_profile_field("rtime", "now"),
            Err(EditorError::UnknownField(_))
        ));
    }

    #[test]
    fn test_tab_names() {
        assert_eq!(Tab::from_name("profile"), Some(Tab::Profile));
        assert_eq!(Tab::from_name("agreements"), Some(Tab::Agreements));
        assert_eq!(Tab::from_name("billing"), None);
    }

    #[test]
    fn test_busy_guard_rejects_reentry() {
        let mut editor = UserEditor::open(user());
        editor.begin().unwrap();
        assert!(matches!(editor.begin(), Err(EditorError::Busy)));
    }
}

//! Account pane: one account at a time, with a "new account" draft
//! mode and required-field validation.

use ledgerdesk_core::AccountRecord;
use rust_decimal::Decimal;

use super::EditorError;
use super::draft::Draft;

/// Which account the pane is editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountSelection {
    /// An existing account, by account code.
    Existing(String),
    /// The blank "new account" draft (empty `acnt_cd` sentinel).
    New,
}

/// Editable account fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    BankCode,
    AcntLinked,
    QualLimit,
}

impl AccountField {
    /// Parse a field name as typed at the console.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bank_code" => Some(Self::BankCode),
            "acnt_linked" => Some(Self::AcntLinked),
            "qual_limit" => Some(Self::QualLimit),
            _ => None,
        }
    }
}

/// What the save path must do for the current draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSaveAction {
    /// Empty `acnt_cd` sentinel: issue the register call.
    Register,
    /// Existing account: issue the update call.
    Update,
}

/// The account pane's state.
#[derive(Debug)]
pub struct AccountPane {
    accounts: Vec<AccountRecord>,
    selection: AccountSelection,
    draft: Draft<AccountRecord>,
    /// Set on the first failed validation; cleared once all required
    /// fields are present (or on reselection).
    invalid: bool,
}

impl Default for AccountPane {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            selection: AccountSelection::New,
            draft: Draft::new(AccountRecord::default()),
            invalid: false,
        }
    }
}

impl AccountPane {
    /// Replace the account list (fetch result) and select the first
    /// entry, or the blank draft when the user has no accounts.
    pub fn load(&mut self, accounts: Vec<AccountRecord>) {
        self.accounts = accounts;
        self.invalid = false;
        match self.accounts.first() {
            Some(first) => {
                self.selection = AccountSelection::Existing(first.acnt_cd.clone());
                self.draft = Draft::new(first.clone());
            }
            None => {
                self.selection = AccountSelection::New;
                self.draft = Draft::new(AccountRecord::default());
            }
        }
    }

    /// All fetched accounts.
    #[must_use]
    pub fn accounts(&self) -> &[AccountRecord] {
        &self.accounts
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &AccountSelection {
        &self.selection
    }

    /// The draft under edit.
    #[must_use]
    pub const fn draft(&self) -> &Draft<AccountRecord> {
        &self.draft
    }

    /// True while the pane shows the required-fields error.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Select an existing account by code, or the blank new-account
    /// draft. Either way the clean/editable pair resets and the
    /// validation error clears.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownAccount`] for a code not in the
    /// fetched list.
    pub fn select(&mut self, selection: AccountSelection) -> Result<(), EditorError> {
        self.invalid = false;
        match selection {
            AccountSelection::New => {
                self.selection = AccountSelection::New;
                self.draft = Draft::new(AccountRecord::default());
                Ok(())
            }
            AccountSelection::Existing(code) => {
                let account = self
                    .accounts
                    .iter()
                    .find(|account| account.acnt_cd == code)
                    .cloned()
                    .ok_or_else(|| EditorError::UnknownAccount(code.clone()))?;
                self.selection = AccountSelection::Existing(code);
                self.draft = Draft::new(account);
                Ok(())
            }
        }
    }

    /// Set one editable field from console input.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidValue`] when the qualification
    /// limit does not parse as a decimal amount.
    pub fn set_field(&mut self, field: AccountField, value: &str) -> Result<(), EditorError> {
        let edited = self.draft.edited_mut();
        match field {
            AccountField::BankCode => edited.bank_code = Some(value.to_string()),
            AccountField::AcntLinked => edited.acnt_linked = Some(value.to_string()),
            AccountField::QualLimit => {
                let amount: Decimal =
                    value
                        .parse()
                        .map_err(|_| EditorError::InvalidValue {
                            field: "qual_limit",
                            value: value.to_string(),
                        })?;
                edited.qual_limit = Some(amount);
            }
        }
        // The visible error clears as soon as every required field is
        // filled in.
        if self.invalid && self.required_present() {
            self.invalid = false;
        }
        Ok(())
    }

    /// Validate the three required fields before a save; marks the
    /// pane invalid on failure.
    pub fn validate(&mut self) -> bool {
        let ok = self.required_present();
        self.invalid = !ok;
        ok
    }

    /// Which call the save must issue for the current draft.
    #[must_use]
    pub fn save_action(&self) -> AccountSaveAction {
        if self.draft.edited().is_unregistered() {
            AccountSaveAction::Register
        } else {
            AccountSaveAction::Update
        }
    }

    fn required_present(&self) -> bool {
        let edited = self.draft.edited();
        edited.bank_code.as_deref().is_some_and(|v| !v.is_empty())
            && edited.acnt_linked.as_deref().is_some_and(|v| !v.is_empty())
            && edited.qual_limit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing(code: &str) -> AccountRecord {
        AccountRecord {
            acnt_cd: code.to_string(),
            bank_code: Some("088".to_string()),
            acnt_linked: Some("110-234".to_string()),
            deposit_amt: Some(Decimal::from(1000)),
            qual_limit: Some(Decimal::from(5000)),
        }
    }

    #[test]
    fn test_load_selects_first_account() {
        let mut pane = AccountPane::default();
        pane.load(vec![existing("A001"), existing("A002")]);
        assert_eq!(
            *pane.selection(),
            AccountSelection::Existing("A001".to_string())
        );
        assert_eq!(pane.draft().clean().acnt_cd, "A001");
    }

    #[test]
    fn test_load_empty_list_selects_new_draft() {
        let mut pane = AccountPane::default();
        pane.load(Vec::new());
        assert_eq!(*pane.selection(), AccountSelection::New);
        assert!(pane.draft().edited().is_unregistered());
    }

    #[test]
    fn test_new_selection_resets_to_blank_draft() {
        let mut pane = AccountPane::default();
        pane.load(vec![existing("A001")]);

        pane.select(AccountSelection::New).unwrap();
        let edited = pane.draft().edited();
        assert!(edited.is_unregistered());
        assert_eq!(edited.bank_code, None);
        assert_eq!(edited.acnt_linked, None);
        assert_eq!(edited.qual_limit, None);
    }

    #[test]
    fn test_unknown_account_rejected() {
        let mut pane = AccountPane::default();
        pane.load(vec![existing("A001")]);
        assert!(matches!(
            pane.select(AccountSelection::Existing("A999".to_string())),
            Err(EditorError::UnknownAccount(_))
        ));
    }

    #[test]
    fn test_validation_marks_and_clears() {
        let mut pane = AccountPane::default();
        pane.load(Vec::new());

        assert!(!pane.validate());
        assert!(pane.is_invalid());

        pane.set_field(AccountField::BankCode, "088").unwrap();
        assert!(pane.is_invalid());
        pane.set_field(AccountField::AcntLinked, "110-234").unwrap();
        assert!(pane.is_invalid());
        pane.set_field(AccountField::QualLimit, "5000000").unwrap();
        // All three present: the error state clears without an
        // explicit re-validate.
        assert!(!pane.is_invalid());
        assert!(pane.validate());
    }

    #[test]
    fn test_save_action_branches_on_sentinel() {
        let mut pane = AccountPane::default();
        pane.load(Vec::new());
        pane.set_field(AccountField::BankCode, "088").unwrap();
        pane.set_field(AccountField::AcntLinked, "110-234").unwrap();
        pane.set_field(AccountField::QualLimit, "5000000").unwrap();
        assert_eq!(pane.save_action(), AccountSaveAction::Register);

        pane.load(vec![existing("A001")]);
        assert_eq!(pane.save_action(), AccountSaveAction::Update);
    }

    #[test]
    fn test_bad_limit_is_invalid_value() {
        let mut pane = AccountPane::default();
        pane.load(Vec::new());
        assert!(matches!(
            pane.set_field(AccountField::QualLimit, "lots"),
            Err(EditorError::InvalidValue { .. })
        ));
    }
}

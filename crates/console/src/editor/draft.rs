//! Clean/editable draft pair with field-wise dirty tracking.
//!
//! Every editor pane follows the same discipline: snapshot the fetched
//! entity as "clean", clone it as "editable", mutate only the clone,
//! and compute dirtiness by field-wise comparison. The comparison
//! deliberately ignores fields that are present on only one side: a
//! partial-field response must never force a false-positive dirty
//! state, so `None` on either side reads as "no change", not as a
//! difference.

use ledgerdesk_core::{AccountRecord, UserRecord};

/// Field-wise comparison against a baseline, under the
/// absent-is-no-change rule.
pub trait FieldCompare {
    /// True iff at least one field present on **both** sides differs.
    fn differs_from(&self, baseline: &Self) -> bool;
}

/// The absent-is-no-change rule for a single optional field.
pub fn field_changed<T: PartialEq>(edited: &Option<T>, clean: &Option<T>) -> bool {
    matches!((edited, clean), (Some(a), Some(b)) if a != b)
}

impl FieldCompare for UserRecord {
    fn differs_from(&self, baseline: &Self) -> bool {
        self.user_uid != baseline.user_uid
            || field_changed(&self.user_name, &baseline.user_name)
            || field_changed(&self.user_birth, &baseline.user_birth)
            || field_changed(&self.user_tel, &baseline.user_tel)
            || field_changed(&self.user_email, &baseline.user_email)
            || field_changed(&self.user_used, &baseline.user_used)
            || field_changed(&self.tend_grade, &baseline.tend_grade)
            || field_changed(&self.tend_date, &baseline.tend_date)
            || field_changed(&self.qual_grade, &baseline.qual_grade)
    }
}

impl FieldCompare for AccountRecord {
    fn differs_from(&self, baseline: &Self) -> bool {
        self.acnt_cd != baseline.acnt_cd
            || field_changed(&self.bank_code, &baseline.bank_code)
            || field_changed(&self.acnt_linked, &baseline.acnt_linked)
            || field_changed(&self.deposit_amt, &baseline.deposit_amt)
            || field_changed(&self.qual_limit, &baseline.qual_limit)
    }
}

/// A clean snapshot plus its editable clone.
#[derive(Debug, Clone)]
pub struct Draft<T> {
    clean: T,
    edited: T,
}

impl<T: FieldCompare + Clone> Draft<T> {
    /// Snapshot `entity` as the clean baseline and clone it for
    /// editing.
    pub fn new(entity: T) -> Self {
        Self {
            clean: entity.clone(),
            edited: entity,
        }
    }

    /// The clean baseline.
    pub const fn clean(&self) -> &T {
        &self.clean
    }

    /// The editable clone.
    pub const fn edited(&self) -> &T {
        &self.edited
    }

    /// Mutable access to the editable clone; the baseline is never
    /// touched by edits.
    pub const fn edited_mut(&mut self) -> &mut T {
        &mut self.edited
    }

    /// Field-wise dirty check under the absent-is-no-change rule.
    pub fn is_dirty(&self) -> bool {
        self.edited.differs_from(&self.clean)
    }

    /// Promote the editable clone to be the new clean baseline (after
    /// a successful save).
    pub fn commit(&mut self) {
        self.clean = self.edited.clone();
    }

    /// Throw away edits and re-snapshot from `entity`.
    pub fn reset(&mut self, entity: T) {
        *self = Self::new(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerdesk_core::UserStatus;

    fn user() -> UserRecord {
        UserRecord {
            user_uid: "U1".to_string(),
            user_name: Some("Kim".to_string()),
            user_email: Some("kim@example.com".to_string()),
            user_used: Some(UserStatus::Active),
            ..UserRecord::default()
        }
    }

    #[test]
    fn test_clean_draft_is_not_dirty() {
        let draft = Draft::new(user());
        assert!(!draft.is_dirty());
    }

    #[test]
    fn test_shared_field_difference_is_dirty() {
        let mut draft = Draft::new(user());
        draft.edited_mut().user_name = Some("Lee".to_string());
        assert!(draft.is_dirty());
    }

    #[test]
    fn test_absent_field_is_never_a_difference() {
        // Clean side has no phone number; editing one in does not make
        // the draft dirty - the field is absent on one side.
        let mut draft = Draft::new(user());
        draft.edited_mut().user_tel = Some("010-1234-5678".to_string());
        assert!(!draft.is_dirty());

        // Clearing a field that the clean side carries is equally
        // not a difference.
        let mut draft = Draft::new(user());
        draft.edited_mut().user_email = None;
        assert!(!draft.is_dirty());
    }

    #[test]
    fn test_commit_promotes_edits_to_baseline() {
        let mut draft = Draft::new(user());
        draft.edited_mut().user_name = Some("Lee".to_string());
        assert!(draft.is_dirty());

        draft.commit();
        assert!(!draft.is_dirty());
        assert_eq!(draft.clean().user_name.as_deref(), Some("Lee"));
    }

    #[test]
    fn test_reset_discards_edits() {
        let mut draft = Draft::new(user());
        draft.edited_mut().user_name = Some("Lee".to_string());
        draft.reset(user());
        assert!(!draft.is_dirty());
        assert_eq!(draft.edited().user_name.as_deref(), Some("Kim"));
    }

    #[test]
    fn test_account_compare_covers_editable_fields() {
        let clean = AccountRecord {
            acnt_cd: "A001".to_string(),
            bank_code: Some("088".to_string()),
            acnt_linked: Some("110-234".to_string()),
            deposit_amt: None,
            qual_limit: Some(rust_decimal::Decimal::from(100)),
        };
        let mut draft = Draft::new(clean);
        assert!(!draft.is_dirty());

        draft.edited_mut().qual_limit = Some(rust_decimal::Decimal::from(200));
        assert!(draft.is_dirty());
    }
}

//! Agreements pane: per-row agree toggles, required rows locked.

use ledgerdesk_core::{AgreementRecord, Flag};

use super::EditorError;

/// The agreements pane's state: one row per (terms_code, terms_type).
#[derive(Debug, Default)]
pub struct AgreementsPane {
    rows: Vec<AgreementRecord>,
}

impl AgreementsPane {
    /// Replace the rows with a fetch result.
    pub fn load(&mut self, rows: Vec<AgreementRecord>) {
        self.rows = rows;
    }

    /// Discard all rows.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// All agreement rows.
    #[must_use]
    pub fn rows(&self) -> &[AgreementRecord] {
        &self.rows
    }

    /// Resolve a toggle request to the flag value the update call must
    /// send. The local row is not modified here; that happens in
    /// [`apply`](Self::apply) only after the backend accepts the
    /// update, so a failed call leaves the checkbox as it was.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownAgreement`] for an unknown key
    /// and [`EditorError::RequiredAgreement`] for rows flagged
    /// required.
    pub fn toggle_target(&self, terms_code: &str, terms_type: &str) -> Result<Flag, EditorError> {
        let row = self
            .rows
            .iter()
            .find(|row| row.matches(terms_code, terms_type))
            .ok_or_else(|| EditorError::UnknownAgreement {
                terms_code: terms_code.to_string(),
                terms_type: terms_type.to_string(),
            })?;

        if row.terms_required.is_yes() {
            return Err(EditorError::RequiredAgreement);
        }

        Ok(row.terms_agree.toggled())
    }

    /// Patch exactly the toggled row's agree flag after a successful
    /// update.
    pub fn apply(&mut self, terms_code: &str, terms_type: &str, agree: Flag) {
        if let Some(row) = self
            .rows
            .iter_mut()
            .find(|row| row.matches(terms_code, terms_type))
        {
            row.terms_agree = agree;
        }
    }
}

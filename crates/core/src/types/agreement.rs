//! Terms-of-service agreement row.

use serde::{Deserialize, Serialize};

use super::Flag;

/// One terms-of-service row, keyed by (`terms_code`, `terms_type`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementRecord {
    /// Terms document code.
    pub terms_code: String,
    /// Terms variant within the code.
    pub terms_type: String,
    /// Whether the user has agreed.
    pub terms_agree: Flag,
    /// Required terms cannot be un-agreed from the console.
    pub terms_required: Flag,
    /// Terms display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_name: Option<String>,
    /// Date of the recorded agree/decline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_date: Option<String>,
    /// Full document path on the backend; only the trailing
    /// `<name>.pdf` segment is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_file: Option<String>,
}

impl AgreementRecord {
    /// Composite row key, `<terms_code>-<terms_type>`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}-{}", self.terms_code, self.terms_type)
    }

    /// True when this row matches the given composite key parts.
    #[must_use]
    pub fn matches(&self, terms_code: &str, terms_type: &str) -> bool {
        self.terms_code == terms_code && self.terms_type == terms_type
    }

    /// The trailing `<name>.pdf` segment of `terms_file`, if any.
    #[must_use]
    pub fn display_file(&self) -> Option<&str> {
        let path = self.terms_file.as_deref()?;
        let name = path.rsplit('/').next()?;
        (!name.is_empty() && name.ends_with(".pdf")).then_some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(file: Option<&str>) -> AgreementRecord {
        AgreementRecord {
            terms_code: "A1".to_string(),
            terms_type: "1".to_string(),
            terms_agree: Flag::No,
            terms_required: Flag::No,
            terms_name: Some("Privacy terms".to_string()),
            terms_date: None,
            terms_file: file.map(String::from),
        }
    }

    #[test]
    fn test_composite_key() {
        assert_eq!(row(None).key(), "A1-1");
        assert!(row(None).matches("A1", "1"));
        assert!(!row(None).matches("A1", "2"));
    }

    #[test]
    fn test_display_file_trailing_segment() {
        assert_eq!(
            row(Some("/static/terms/v3/privacy.pdf")).display_file(),
            Some("privacy.pdf")
        );
        assert_eq!(row(Some("privacy.pdf")).display_file(), Some("privacy.pdf"));
        assert_eq!(row(Some("/static/terms/readme.txt")).display_file(), None);
        assert_eq!(row(None).display_file(), None);
    }
}

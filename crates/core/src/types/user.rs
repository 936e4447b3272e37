//! User profile row and its graded enums.

use serde::{Deserialize, Serialize};

use super::ParseCodeError;

/// User account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    #[serde(rename = "Y")]
    Active,
    #[serde(rename = "N")]
    Suspended,
    #[serde(rename = "D")]
    Withdrawn,
}

impl UserStatus {
    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
            Self::Withdrawn => "Withdrawn",
        }
    }

    /// Parse a wire code.
    ///
    /// # Errors
    ///
    /// Returns `ParseCodeError` for anything other than `Y`, `N`, `D`.
    pub fn from_code(code: &str) -> Result<Self, ParseCodeError> {
        match code {
            "Y" => Ok(Self::Active),
            "N" => Ok(Self::Suspended),
            "D" => Ok(Self::Withdrawn),
            other => Err(ParseCodeError {
                kind: "user status",
                code: other.to_string(),
            }),
        }
    }
}

/// Risk-tolerance grade (1 = most conservative, 5 = most aggressive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskGrade {
    #[serde(rename = "1")]
    Stable,
    #[serde(rename = "2")]
    StabilitySeeking,
    #[serde(rename = "3")]
    RiskNeutral,
    #[serde(rename = "4")]
    ActiveInvestment,
    #[serde(rename = "5")]
    Aggressive,
}

impl RiskGrade {
    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::StabilitySeeking => "Stability-seeking",
            Self::RiskNeutral => "Risk-neutral",
            Self::ActiveInvestment => "Active investment",
            Self::Aggressive => "Aggressive investment",
        }
    }

    /// Parse a wire code (`"1"` through `"5"`).
    ///
    /// # Errors
    ///
    /// Returns `ParseCodeError` for codes outside `1..=5`.
    pub fn from_code(code: &str) -> Result<Self, ParseCodeError> {
        match code {
            "1" => Ok(Self::Stable),
            "2" => Ok(Self::StabilitySeeking),
            "3" => Ok(Self::RiskNeutral),
            "4" => Ok(Self::ActiveInvestment),
            "5" => Ok(Self::Aggressive),
            other => Err(ParseCodeError {
                kind: "risk grade",
                code: other.to_string(),
            }),
        }
    }
}

/// Investor qualification grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualGrade {
    #[serde(rename = "1")]
    General,
    #[serde(rename = "2")]
    IncomeQualified,
    #[serde(rename = "3")]
    Professional,
}

impl QualGrade {
    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General investor",
            Self::IncomeQualified => "Income-qualified investor",
            Self::Professional => "Professional investor",
        }
    }

    /// Parse a wire code (`"1"` through `"3"`).
    ///
    /// # Errors
    ///
    /// Returns `ParseCodeError` for codes outside `1..=3`.
    pub fn from_code(code: &str) -> Result<Self, ParseCodeError> {
        match code {
            "1" => Ok(Self::General),
            "2" => Ok(Self::IncomeQualified),
            "3" => Ok(Self::Professional),
            other => Err(ParseCodeError {
                kind: "qualification grade",
                code: other.to_string(),
            }),
        }
    }
}

/// One user row as fetched by the user search call.
///
/// Only `user_uid` is guaranteed; everything else may be absent on a
/// partial response and deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserRecord {
    /// Immutable user identifier (row identity in lists).
    #[serde(default)]
    pub user_uid: String,
    /// Identity-verification CI value (read-only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ci: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Birth date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_birth: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_tel: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    /// Account status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_used: Option<UserStatus>,
    /// Risk-tolerance grade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tend_grade: Option<RiskGrade>,
    /// Date the risk grade was assessed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tend_date: Option<String>,
    /// Qualification grade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qual_grade: Option<QualGrade>,
    /// Join timestamp (read-only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtime: Option<String>,
    /// Pagination cursor carried on the row; the last row's value keys
    /// the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_user_row_parses() {
        let json = r#"{"user_uid":"U100","user_name":"Kim","user_used":"Y"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_uid, "U100");
        assert_eq!(user.user_used, Some(UserStatus::Active));
        assert_eq!(user.user_email, None);
        assert_eq!(user.next_key, None);
    }

    #[test]
    fn test_grade_codes() {
        assert_eq!(RiskGrade::from_code("5"), Ok(RiskGrade::Aggressive));
        assert!(RiskGrade::from_code("6").is_err());
        assert_eq!(QualGrade::from_code("2"), Ok(QualGrade::IncomeQualified));
        assert_eq!(
            serde_json::to_string(&RiskGrade::RiskNeutral).ok().as_deref(),
            Some("\"3\"")
        );
    }

    #[test]
    fn test_absent_fields_not_serialized() {
        let user = UserRecord {
            user_uid: "U1".to_string(),
            ..UserRecord::default()
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"user_uid":"U1"}"#);
    }
}

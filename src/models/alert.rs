use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::ActionRequired;

// ---------------------------------------------------------------------------
// AlertKind
// ---------------------------------------------------------------------------

/// What family of detection produced the alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Only iatrogenic-risk tier patterns matched.
    IatrogenicRisk,
    /// Only red-flag category patterns matched.
    RedFlag,
    /// Both families matched in the same pass.
    Combined,
}

impl AlertKind {
    /// Derive the kind from the verdict counters.
    pub fn from_counts(warning_count: usize, highlight_count: usize) -> Self {
        match (warning_count > 0, highlight_count > 0) {
            (true, true) => Self::Combined,
            (false, true) => Self::RedFlag,
            _ => Self::IatrogenicRisk,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IatrogenicRisk => "iatrogenic_risk",
            Self::RedFlag => "red_flag",
            Self::Combined => "combined",
        }
    }
}

// ---------------------------------------------------------------------------
// AlertRecord
// ---------------------------------------------------------------------------

/// A safety alert raised for one analysis pass. Mutated only to flip
/// `is_dismissed`; removed from the session's active set by explicit
/// dismissal or by a clear-all on teardown, never by expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: Uuid,
    pub timestamp: NaiveDateTime,
    pub urgency_level: u8,
    pub kind: AlertKind,
    /// Clinician-facing message, locale-dependent.
    pub message: String,
    /// Suggested actions for the required action level.
    pub recommendations: Vec<String>,
    /// Rule descriptions of the findings behind this alert.
    pub evidence: Vec<String>,
    pub action_required: ActionRequired,
    pub is_dismissed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_kind_from_counts() {
        assert_eq!(AlertKind::from_counts(1, 0), AlertKind::IatrogenicRisk);
        assert_eq!(AlertKind::from_counts(0, 1), AlertKind::RedFlag);
        assert_eq!(AlertKind::from_counts(2, 1), AlertKind::Combined);
        // Degenerate zero/zero pass defaults to the iatrogenic family.
        assert_eq!(AlertKind::from_counts(0, 0), AlertKind::IatrogenicRisk);
    }
}

use serde::{Deserialize, Serialize};

use super::enums::{RedFlagCategory, RiskLevel, SeverityTier};

/// Urgency at or above this level marks a verdict as alert-worthy.
pub const ALERT_URGENCY_FLOOR: u8 = 3;

// ---------------------------------------------------------------------------
// RiskVerdict
// ---------------------------------------------------------------------------

/// Outcome of one classification pass over a transcript chunk.
/// Created fresh per chunk; never persisted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskVerdict {
    /// Label derived from `urgency_level`.
    pub risk_level: RiskLevel,
    /// Maximum severity encountered, 1-5.
    pub urgency_level: u8,
    /// Distinct iatrogenic-risk patterns matched (deduplicated by pattern
    /// source string).
    pub warning_count: usize,
    /// Distinct red-flag categories matched (at most one per category).
    pub highlight_count: usize,
    /// True when `urgency_level >= 3`.
    pub should_alert: bool,
}

impl RiskVerdict {
    /// Build a verdict from a final urgency level and the two counters.
    pub fn from_counts(urgency_level: u8, warning_count: usize, highlight_count: usize) -> Self {
        Self {
            risk_level: RiskLevel::from_urgency(urgency_level),
            urgency_level,
            warning_count,
            highlight_count,
            should_alert: urgency_level >= ALERT_URGENCY_FLOOR,
        }
    }

    /// The terminal verdict for empty or unmatched input.
    pub fn safe() -> Self {
        Self::from_counts(1, 0, 0)
    }
}

// ---------------------------------------------------------------------------
// Finding
// ---------------------------------------------------------------------------

/// Where a finding came from: a severity-tier rule or a red-flag category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FindingOrigin {
    Tier(SeverityTier),
    RedFlag(RedFlagCategory),
}

/// One matched rule within an analysis pass. Feeds alert evidence and the
/// audit log; the matched span never leaves the session boundary via tracing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    pub origin: FindingOrigin,
    /// Source string of the rule that fired (the dedup key for warnings).
    pub source: String,
    /// The transcript span that triggered the rule.
    pub matched_text: String,
    /// Rule description from the rule table, for audit display.
    pub description: String,
}

// ---------------------------------------------------------------------------
// RiskAnalysis
// ---------------------------------------------------------------------------

/// Verdict plus the findings that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub verdict: RiskVerdict,
    pub findings: Vec<Finding>,
}

impl RiskAnalysis {
    /// Findings that came from red-flag categories.
    pub fn red_flag_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| matches!(f.origin, FindingOrigin::RedFlag(_)))
    }

    /// Findings that came from iatrogenic severity tiers.
    pub fn tier_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| matches!(f.origin, FindingOrigin::Tier(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_verdict_is_terminal_case() {
        let v = RiskVerdict::safe();
        assert_eq!(v.risk_level, RiskLevel::Safe);
        assert_eq!(v.urgency_level, 1);
        assert_eq!(v.warning_count, 0);
        assert_eq!(v.highlight_count, 0);
        assert!(!v.should_alert);
    }

    #[test]
    fn should_alert_tracks_urgency_floor() {
        assert!(!RiskVerdict::from_counts(2, 1, 0).should_alert);
        assert!(RiskVerdict::from_counts(3, 1, 0).should_alert);
        assert!(RiskVerdict::from_counts(5, 2, 1).should_alert);
    }

    #[test]
    fn verdict_level_matches_urgency() {
        assert_eq!(RiskVerdict::from_counts(4, 0, 1).risk_level, RiskLevel::Warning);
        assert_eq!(RiskVerdict::from_counts(5, 1, 0).risk_level, RiskLevel::Danger);
    }
}

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Overall risk label derived from the urgency level of one analysis pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Nothing matched, or only sub-threshold matches. Urgency 1-2.
    Safe,
    /// Urgency 3: technique should be reviewed before continuing.
    Caution,
    /// Urgency 4: red flag or high-tier risk language present.
    Warning,
    /// Urgency 5: critical iatrogenic-risk language present.
    Danger,
}

impl RiskLevel {
    /// Derive the label from an urgency level (1-5).
    pub fn from_urgency(urgency: u8) -> Self {
        match urgency {
            u if u >= 5 => Self::Danger,
            4 => Self::Warning,
            3 => Self::Caution,
            _ => Self::Safe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

// ---------------------------------------------------------------------------
// SeverityTier
// ---------------------------------------------------------------------------

/// Iatrogenic-risk severity tier of a pattern group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Critical,
    High,
    Medium,
}

impl SeverityTier {
    /// The urgency ceiling a match in this tier raises the verdict to.
    pub fn urgency_ceiling(&self) -> u8 {
        match self {
            Self::Critical => 5,
            Self::High => 4,
            Self::Medium => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

// ---------------------------------------------------------------------------
// RedFlagCategory
// ---------------------------------------------------------------------------

/// Non-iatrogenic red-flag category. At most one highlight is counted per
/// category per analysis pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RedFlagCategory {
    Neurological,
    Vascular,
    Infection,
    Fracture,
    Systemic,
}

impl RedFlagCategory {
    pub const ALL: [RedFlagCategory; 5] = [
        Self::Neurological,
        Self::Vascular,
        Self::Infection,
        Self::Fracture,
        Self::Systemic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neurological => "neurological",
            Self::Vascular => "vascular",
            Self::Infection => "infection",
            Self::Fracture => "fracture",
            Self::Systemic => "systemic",
        }
    }
}

// ---------------------------------------------------------------------------
// ActionRequired
// ---------------------------------------------------------------------------

/// Clinical action demanded by an alert, derived from its urgency level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionRequired {
    StopImmediately,
    Caution,
    Monitor,
    Inform,
}

impl ActionRequired {
    /// Derive the required action from an urgency level (1-5).
    pub fn from_urgency(urgency: u8) -> Self {
        match urgency {
            4 | 5 => Self::StopImmediately,
            3 => Self::Caution,
            2 => Self::Monitor,
            _ => Self::Inform,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StopImmediately => "STOP_IMMEDIATELY",
            Self::Caution => "CAUTION",
            Self::Monitor => "MONITOR",
            Self::Inform => "INFORM",
        }
    }
}

// ---------------------------------------------------------------------------
// Speaker
// ---------------------------------------------------------------------------

/// Who produced an utterance, normalized from the upstream `actor` field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Clinician,
    Patient,
    Other,
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Entity kind as tagged by the upstream NLP collaborator. The upstream set
/// is open-ended; unrecognized kinds deserialize as `Other` and are dropped
/// during checklist mapping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Symptom,
    Finding,
    Test,
    Diagnosis,
    Intervention,
    Plan,
    Medication,
    Observation,
    #[serde(other)]
    Other,
}

// ---------------------------------------------------------------------------
// SignalTag
// ---------------------------------------------------------------------------

/// The structurable tag set a checklist signal may carry. One-to-one with the
/// retained entity kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SignalTag {
    Symptom,
    Finding,
    Test,
    Diagnosis,
    Intervention,
    Plan,
}

impl SignalTag {
    /// Map a retained entity kind to its signal tag. `None` for kinds outside
    /// the structurable set.
    pub fn from_entity_kind(kind: EntityKind) -> Option<Self> {
        match kind {
            EntityKind::Symptom => Some(Self::Symptom),
            EntityKind::Finding => Some(Self::Finding),
            EntityKind::Test => Some(Self::Test),
            EntityKind::Diagnosis => Some(Self::Diagnosis),
            EntityKind::Intervention => Some(Self::Intervention),
            EntityKind::Plan => Some(Self::Plan),
            EntityKind::Medication | EntityKind::Observation | EntityKind::Other => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ChannelKind
// ---------------------------------------------------------------------------

/// Notification channel identity, matched against the per-channel config
/// toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Visual,
    Audio,
    Vibration,
}

impl ChannelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Audio => "audio",
            Self::Vibration => "vibration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_from_urgency_boundaries() {
        assert_eq!(RiskLevel::from_urgency(1), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_urgency(2), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_urgency(3), RiskLevel::Caution);
        assert_eq!(RiskLevel::from_urgency(4), RiskLevel::Warning);
        assert_eq!(RiskLevel::from_urgency(5), RiskLevel::Danger);
    }

    #[test]
    fn action_required_from_urgency() {
        assert_eq!(ActionRequired::from_urgency(5), ActionRequired::StopImmediately);
        assert_eq!(ActionRequired::from_urgency(4), ActionRequired::StopImmediately);
        assert_eq!(ActionRequired::from_urgency(3), ActionRequired::Caution);
        assert_eq!(ActionRequired::from_urgency(2), ActionRequired::Monitor);
        assert_eq!(ActionRequired::from_urgency(1), ActionRequired::Inform);
    }

    #[test]
    fn severity_tier_ceilings() {
        assert_eq!(SeverityTier::Critical.urgency_ceiling(), 5);
        assert_eq!(SeverityTier::High.urgency_ceiling(), 4);
        assert_eq!(SeverityTier::Medium.urgency_ceiling(), 3);
    }

    #[test]
    fn unknown_entity_kind_deserializes_as_other() {
        let kind: EntityKind = serde_json::from_str("\"vital_sign\"").unwrap();
        assert_eq!(kind, EntityKind::Other);
    }

    #[test]
    fn medication_and_observation_are_not_structurable() {
        assert!(SignalTag::from_entity_kind(EntityKind::Medication).is_none());
        assert!(SignalTag::from_entity_kind(EntityKind::Observation).is_none());
        assert_eq!(
            SignalTag::from_entity_kind(EntityKind::Symptom),
            Some(SignalTag::Symptom)
        );
    }

    #[test]
    fn risk_level_ordering() {
        assert!(RiskLevel::Safe < RiskLevel::Caution);
        assert!(RiskLevel::Warning < RiskLevel::Danger);
    }
}

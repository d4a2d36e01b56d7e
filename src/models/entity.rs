use serde::{Deserialize, Serialize};

use super::enums::{EntityKind, SignalTag, Speaker};

// ---------------------------------------------------------------------------
// ClinicalEntity
// ---------------------------------------------------------------------------

/// A pre-tagged clinical entity produced by the external NLP collaborator.
/// The upstream is occasionally noisy: unknown kinds and missing actors are
/// tolerated here and filtered during checklist mapping, never rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalEntity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub text: String,
    /// Raw actor label from the NLP step ("clinician", "patient", ...).
    #[serde(default)]
    pub actor: Option<String>,
}

impl ClinicalEntity {
    /// Normalize the upstream actor label to a speaker. Unrecognized or
    /// missing actors map to `Other`.
    pub fn speaker(&self) -> Speaker {
        match self.actor.as_deref().map(str::trim) {
            Some(a) if a.eq_ignore_ascii_case("clinician") => Speaker::Clinician,
            Some(a) if a.eq_ignore_ascii_case("patient") => Speaker::Patient,
            _ => Speaker::Other,
        }
    }
}

// ---------------------------------------------------------------------------
// ChecklistSignal
// ---------------------------------------------------------------------------

/// Normalized intermediate form between entity extraction and note assembly.
/// One-to-one with retained `ClinicalEntity` instances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistSignal {
    pub speaker: Speaker,
    pub text: String,
    pub tag: SignalTag,
}

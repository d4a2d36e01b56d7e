use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SoapNote
// ---------------------------------------------------------------------------

/// The four sections of a SOAP note, each an ordered list of signal texts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoapSections {
    pub subjective: Vec<String>,
    pub objective: Vec<String>,
    pub assessment: Vec<String>,
    pub plan: Vec<String>,
}

impl SoapSections {
    /// Total items across all four sections.
    pub fn total_items(&self) -> usize {
        self.subjective.len() + self.objective.len() + self.assessment.len() + self.plan.len()
    }
}

/// A structured clinical note built fresh from a checklist-signal list.
/// Rebuilding always produces a new note; notes are never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoapNote {
    pub sections: SoapSections,
    pub locale: String,
}

// ---------------------------------------------------------------------------
// NoteStatus
// ---------------------------------------------------------------------------

/// Presentation-facing note state, a pure function of input presence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoteStatus {
    /// No entity data supplied yet.
    Pending,
    /// Data supplied, nothing qualified for the note.
    Empty,
    /// At least one signal bucketed.
    Ready,
}

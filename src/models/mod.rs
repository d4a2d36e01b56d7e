pub mod alert;
pub mod entity;
pub mod enums;
pub mod note;
pub mod verdict;

pub use alert::{AlertKind, AlertRecord};
pub use entity::{ChecklistSignal, ClinicalEntity};
pub use enums::{
    ActionRequired, ChannelKind, EntityKind, RedFlagCategory, RiskLevel, SeverityTier, SignalTag,
    Speaker,
};
pub use note::{NoteStatus, SoapNote, SoapSections};
pub use verdict::{Finding, FindingOrigin, RiskAnalysis, RiskVerdict, ALERT_URGENCY_FLOOR};

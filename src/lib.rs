//! Real-time clinical safety core for physiotherapy session capture.
//!
//! Transcript chunks flow in from an upstream capture layer; this crate
//! classifies each one against a bilingual rule table (iatrogenic-risk
//! severity tiers plus red-flag categories), raises alerts through
//! pluggable notification channels, and routes structured clinical
//! entities into SOAP note sections.
//!
//! Everything is session-scoped and in-memory. Persistence, transcription,
//! and UI rendering belong to the host application; transcript text never
//! reaches the logs.

pub mod analysis;
pub mod config;
pub mod models;
pub mod rules;
pub mod session;

pub use analysis::risk::RiskClassifier;
pub use analysis::soap::{build_note, note_status, to_checklist};
pub use config::SafetyConfig;
pub use models::alert::{AlertKind, AlertRecord};
pub use models::verdict::{Finding, RiskAnalysis, RiskVerdict};
pub use rules::{RuleError, RuleSet};
pub use session::{SafetyError, SafetyEvent, SafetySession};

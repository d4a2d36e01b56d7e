//! Stateless analysis passes: the pattern-based risk classifier and the
//! entity-to-SOAP note builder. Both are pure and safe to call concurrently.

pub mod risk;
pub mod soap;

pub use risk::RiskClassifier;
pub use soap::{build_note, note_status, to_checklist};

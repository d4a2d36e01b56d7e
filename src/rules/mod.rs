//! Declarative clinical rule tables.
//!
//! Clinical judgment lives in a versionable JSON table (severity tiers plus
//! red-flag categories), loaded at session start and compiled once. Changing
//! the rules does not require a rebuild; the matching algorithm in
//! `analysis::risk` stays fixed.

pub mod compiled;
pub mod schema;

use thiserror::Error;

pub use compiled::{CompiledRule, CompiledRules};
pub use schema::{RedFlagRules, RuleDef, RuleSet, SeverityTierRules};

/// Rule table errors.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Rule table load failed ({0}): {1}")]
    RuleLoad(String, String),

    #[error("Rule table parse failed: {0}")]
    RuleParse(String),

    #[error("Invalid pattern in {group} ({pattern}): {reason}")]
    InvalidPattern {
        group: &'static str,
        pattern: String,
        reason: String,
    },
}

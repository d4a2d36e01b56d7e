use std::path::Path;

use serde::{Deserialize, Serialize};

use super::RuleError;

/// One declarative rule: a case-insensitive regex plus the description shown
/// in audit evidence. The pattern string itself is the identity used for
/// warning deduplication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleDef {
    pub pattern: String,
    pub description: String,
}

/// Iatrogenic-risk rules grouped by severity tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeverityTierRules {
    #[serde(default)]
    pub critical: Vec<RuleDef>,
    #[serde(default)]
    pub high: Vec<RuleDef>,
    #[serde(default)]
    pub medium: Vec<RuleDef>,
}

/// Red-flag rules grouped by clinical category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedFlagRules {
    #[serde(default)]
    pub neurological: Vec<RuleDef>,
    #[serde(default)]
    pub vascular: Vec<RuleDef>,
    #[serde(default)]
    pub infection: Vec<RuleDef>,
    #[serde(default)]
    pub fracture: Vec<RuleDef>,
    #[serde(default)]
    pub systemic: Vec<RuleDef>,
}

/// The declarative clinical rule table. Versionable data, not code: clinical
/// rule changes ship as a JSON file, the matching algorithm stays fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    pub version: u32,
    pub severity_tiers: SeverityTierRules,
    pub red_flags: RedFlagRules,
}

/// The bundled default rule table (Spanish-primary with English variants).
const DEFAULT_RULES_JSON: &str = include_str!("default_rules.json");

impl RuleSet {
    /// The rule table bundled with the crate.
    pub fn builtin() -> Self {
        // The bundled table is validated by the test suite; a parse failure
        // here is a build defect, not a runtime condition.
        serde_json::from_str(DEFAULT_RULES_JSON).expect("bundled rule table must parse")
    }

    /// Parse a rule table from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, RuleError> {
        serde_json::from_str(json).map_err(|e| RuleError::RuleParse(e.to_string()))
    }

    /// Load a rule table from an external JSON file.
    pub fn from_path(path: &Path) -> Result<Self, RuleError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| RuleError::RuleLoad(path.display().to_string(), e.to_string()))?;
        Self::from_json_str(&json)
    }

    /// Total number of rules across all groups.
    pub fn rule_count(&self) -> usize {
        let tiers = &self.severity_tiers;
        let flags = &self.red_flags;
        tiers.critical.len()
            + tiers.high.len()
            + tiers.medium.len()
            + flags.neurological.len()
            + flags.vascular.len()
            + flags.infection.len()
            + flags.fracture.len()
            + flags.systemic.len()
    }
}

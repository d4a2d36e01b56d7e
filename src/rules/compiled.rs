use std::sync::LazyLock;

use regex::Regex;

use crate::models::enums::{RedFlagCategory, SeverityTier};

use super::schema::{RuleDef, RuleSet};
use super::RuleError;

/// A compiled pattern with its audit metadata.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub regex: Regex,
    /// The raw pattern source, the dedup identity for warning counting.
    pub source: String,
    pub description: String,
}

impl CompiledRule {
    fn compile(group: &'static str, def: &RuleDef) -> Result<Self, RuleError> {
        let regex = Regex::new(&def.pattern).map_err(|e| RuleError::InvalidPattern {
            group,
            pattern: def.pattern.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            regex,
            source: def.pattern.clone(),
            description: def.description.clone(),
        })
    }
}

/// A `RuleSet` with every pattern regex-compiled and grouped for scanning.
/// Tier groups scan in severity order; red-flag groups scan in the fixed
/// category order.
#[derive(Debug, Clone)]
pub struct CompiledRules {
    pub tiers: Vec<(SeverityTier, Vec<CompiledRule>)>,
    pub red_flags: Vec<(RedFlagCategory, Vec<CompiledRule>)>,
}

impl CompiledRules {
    /// Compile a declarative rule table. External tables are untrusted data:
    /// a bad pattern surfaces as `RuleError::InvalidPattern`, never a panic.
    pub fn compile(rules: &RuleSet) -> Result<Self, RuleError> {
        let tiers = vec![
            (
                SeverityTier::Critical,
                compile_group("severity_tiers.critical", &rules.severity_tiers.critical)?,
            ),
            (
                SeverityTier::High,
                compile_group("severity_tiers.high", &rules.severity_tiers.high)?,
            ),
            (
                SeverityTier::Medium,
                compile_group("severity_tiers.medium", &rules.severity_tiers.medium)?,
            ),
        ];

        let red_flags = vec![
            (
                RedFlagCategory::Neurological,
                compile_group("red_flags.neurological", &rules.red_flags.neurological)?,
            ),
            (
                RedFlagCategory::Vascular,
                compile_group("red_flags.vascular", &rules.red_flags.vascular)?,
            ),
            (
                RedFlagCategory::Infection,
                compile_group("red_flags.infection", &rules.red_flags.infection)?,
            ),
            (
                RedFlagCategory::Fracture,
                compile_group("red_flags.fracture", &rules.red_flags.fracture)?,
            ),
            (
                RedFlagCategory::Systemic,
                compile_group("red_flags.systemic", &rules.red_flags.systemic)?,
            ),
        ];

        Ok(Self { tiers, red_flags })
    }

    /// The compiled bundled rule table.
    pub fn builtin() -> &'static CompiledRules {
        static BUILTIN: LazyLock<CompiledRules> = LazyLock::new(|| {
            CompiledRules::compile(&RuleSet::builtin())
                .expect("bundled rule table must compile")
        });
        &BUILTIN
    }
}

fn compile_group(group: &'static str, defs: &[RuleDef]) -> Result<Vec<CompiledRule>, RuleError> {
    defs.iter().map(|d| CompiledRule::compile(group, d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::schema::{RedFlagRules, SeverityTierRules};

    #[test]
    fn builtin_rules_compile() {
        let rules = CompiledRules::builtin();
        assert_eq!(rules.tiers.len(), 3);
        assert_eq!(rules.red_flags.len(), 5);
        assert_eq!(rules.tiers[0].0, SeverityTier::Critical);
        assert_eq!(rules.red_flags[1].0, RedFlagCategory::Vascular);
    }

    #[test]
    fn invalid_pattern_is_reported_with_group() {
        let rules = RuleSet {
            version: 1,
            severity_tiers: SeverityTierRules {
                critical: vec![RuleDef {
                    pattern: "(?i)unclosed(".into(),
                    description: "broken".into(),
                }],
                ..Default::default()
            },
            red_flags: RedFlagRules::default(),
        };
        let err = CompiledRules::compile(&rules).unwrap_err();
        match err {
            RuleError::InvalidPattern { group, .. } => {
                assert_eq!(group, "severity_tiers.critical");
            }
            other => panic!("Expected InvalidPattern, got: {other:?}"),
        }
    }

    #[test]
    fn compiled_rule_keeps_source_as_identity() {
        let def = RuleDef {
            pattern: r"(?i)dolor\s+insoportable".into(),
            description: "test".into(),
        };
        let compiled = CompiledRule::compile("severity_tiers.critical", &def).unwrap();
        assert_eq!(compiled.source, def.pattern);
        assert!(compiled.regex.is_match("DOLOR insoportable"));
    }
}

use std::collections::HashSet;

use crate::models::verdict::{Finding, FindingOrigin, RiskAnalysis, RiskVerdict};
use crate::rules::{CompiledRules, RuleError, RuleSet};

/// Pattern-based iatrogenic-risk and red-flag classifier.
///
/// Pure and total over its input: any string, including empty, yields a
/// verdict and never a panic. Severity is max-based, so pattern order within
/// a tier cannot change the final urgency; it does affect which pattern a
/// warning is attributed to.
pub struct RiskClassifier {
    rules: CompiledRules,
}

impl RiskClassifier {
    pub fn new(rules: CompiledRules) -> Self {
        Self { rules }
    }

    /// Classifier over a declarative rule table (external JSON).
    pub fn from_rule_set(rules: &RuleSet) -> Result<Self, RuleError> {
        Ok(Self::new(CompiledRules::compile(rules)?))
    }

    /// Classify a transcript chunk. Thin verdict-only wrapper over `analyze`.
    pub fn classify(&self, transcript: &str) -> RiskVerdict {
        self.analyze(transcript).verdict
    }

    /// Full analysis pass: verdict plus the findings behind it.
    ///
    /// Tier scan: every pattern in every tier is tested; a pattern counts one
    /// warning the first time its source string fires in this pass. The same
    /// statement matching two distinct patterns counts twice — upstream
    /// clinical review depends on that counting, so it is preserved here.
    ///
    /// Red-flag scan: per category, first match wins and closes the category,
    /// so `highlight_count` never exceeds the number of categories.
    pub fn analyze(&self, transcript: &str) -> RiskAnalysis {
        if transcript.trim().is_empty() {
            return RiskAnalysis {
                verdict: RiskVerdict::safe(),
                findings: Vec::new(),
            };
        }

        let mut urgency: u8 = 1;
        let mut warning_count = 0usize;
        let mut highlight_count = 0usize;
        let mut findings = Vec::new();
        let mut seen_sources: HashSet<&str> = HashSet::new();

        for (tier, rules) in &self.rules.tiers {
            for rule in rules {
                let Some(m) = rule.regex.find(transcript) else {
                    continue;
                };
                if !seen_sources.insert(rule.source.as_str()) {
                    continue;
                }
                warning_count += 1;
                urgency = urgency.max(tier.urgency_ceiling());
                tracing::debug!(
                    tier = tier.as_str(),
                    description = %rule.description,
                    "Iatrogenic-risk pattern fired"
                );
                findings.push(Finding {
                    origin: FindingOrigin::Tier(*tier),
                    source: rule.source.clone(),
                    matched_text: m.as_str().to_string(),
                    description: rule.description.clone(),
                });
            }
        }

        for (category, rules) in &self.rules.red_flags {
            for rule in rules {
                let Some(m) = rule.regex.find(transcript) else {
                    continue;
                };
                highlight_count += 1;
                urgency = urgency.max(4);
                tracing::debug!(
                    category = category.as_str(),
                    description = %rule.description,
                    "Red-flag pattern fired"
                );
                findings.push(Finding {
                    origin: FindingOrigin::RedFlag(*category),
                    source: rule.source.clone(),
                    matched_text: m.as_str().to_string(),
                    description: rule.description.clone(),
                });
                // One flag per category per pass.
                break;
            }
        }

        RiskAnalysis {
            verdict: RiskVerdict::from_counts(urgency, warning_count, highlight_count),
            findings,
        }
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new(CompiledRules::builtin().clone())
    }
}

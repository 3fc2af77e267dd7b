//! Misprint detection rule.
//!
//! A misprint is a zombie or absent key that closely resembles some other
//! declared key, e.g. a view asking for `HOME.TITEL` while the language
//! files declare `HOME.TITLE`. Suspects come from the diagnostics of the
//! rules evaluated before this one, so disabling both the zombie and absent
//! rules leaves this rule with nothing to examine.

use super::{Checker, RuleContext, similarity::similarity};
use crate::issues::{Diagnostic, Rule, Severity};

#[derive(Debug, Clone)]
pub struct MisprintRule {
    severity: Severity,
    coefficient: f64,
    ignored_keys: Vec<String>,
}

impl MisprintRule {
    pub fn new(severity: Severity, coefficient: f64, ignored_keys: Vec<String>) -> Self {
        Self {
            severity,
            coefficient,
            ignored_keys,
        }
    }

    fn is_ignored(&self, key: &str) -> bool {
        self.ignored_keys.iter().any(|k| k == key)
    }

    /// Declared keys at least `coefficient` similar to `suspect`, most
    /// similar first. Ties keep declaration order.
    fn candidates(&self, suspect: &str, declared: &[&str]) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = declared
            .iter()
            .copied()
            .filter(|key| *key != suspect && !self.is_ignored(key))
            .map(|key| (similarity(suspect, key), key))
            .filter(|(score, _)| *score >= self.coefficient)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.into_iter().map(|(_, key)| key.to_string()).collect()
    }
}

impl Checker for MisprintRule {
    fn rule(&self) -> Rule {
        Rule::MisprintKeys
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let declared = ctx.repository.key_names();

        ctx.prior
            .iter()
            .filter(|d| matches!(d.rule, Rule::ZombieKeys | Rule::KeysOnViews))
            .filter(|d| !self.is_ignored(&d.key))
            .filter_map(|suspect| {
                let suggestions = self.candidates(&suspect.key, &declared);
                if suggestions.is_empty() {
                    return None;
                }
                Some(
                    Diagnostic::new(
                        &suspect.key,
                        Rule::MisprintKeys,
                        self.severity,
                        &suspect.source_file,
                    )
                    .with_related_files(suspect.related_files.clone())
                    .with_suggestions(suggestions)
                    .with_location(suspect.location)
                    .with_source_line(suspect.source_line.clone()),
                )
            })
            .collect()
    }
}

//! Empty value detection rule.
//!
//! Detects declared keys whose value is empty or whitespace-only.
//! Views are not considered.

use super::{Checker, RuleContext};
use crate::{
    core::data::LanguageFile,
    issues::{Diagnostic, Location, Rule, Severity},
};

#[derive(Debug, Clone)]
pub struct EmptyKeysRule {
    severity: Severity,
}

impl EmptyKeysRule {
    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Checker for EmptyKeysRule {
    fn rule(&self) -> Rule {
        Rule::EmptyKeys
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        check_empty_keys(ctx.repository.files(), self.severity)
    }
}

pub fn check_empty_keys(files: &[LanguageFile], severity: Severity) -> Vec<Diagnostic> {
    files
        .iter()
        .flat_map(|file| {
            file.entries()
                .iter()
                .filter(|entry| entry.value.trim().is_empty())
                .map(|entry| {
                    Diagnostic::new(&entry.key, Rule::EmptyKeys, severity, &file.path)
                        .with_location(Some(Location::new(entry.line, 1)))
                })
        })
        .collect()
}

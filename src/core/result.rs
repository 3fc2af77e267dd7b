//! Result aggregation: ignore filtering and pass/fail signals.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::{
    core::LintError,
    issues::{Diagnostic, Rule, Severity},
};

/// Case-insensitive key patterns whose diagnostics are dropped.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    patterns: Vec<Regex>,
}

impl IgnoreFilter {
    pub fn new(patterns: &[String]) -> Result<Self, LintError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| LintError::pattern(p, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_ignored(&self, key: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(key))
    }

    /// Keep the diagnostics whose key matches no pattern, in order.
    pub fn apply(&self, diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
        if self.patterns.is_empty() {
            return diagnostics;
        }
        diagnostics
            .into_iter()
            .filter(|d| !self.is_ignored(&d.key))
            .collect()
    }
}

/// Outcome of one lint run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
    /// Number of warnings tolerated before the run fails.
    pub max_warning: usize,
    /// Language files rewritten by fix mode.
    pub fixed_files: Vec<String>,
}

/// Apply the ignore filter once, over the output of every rule.
pub fn aggregate(
    diagnostics: Vec<Diagnostic>,
    ignore: &IgnoreFilter,
    max_warning: usize,
) -> LintResult {
    LintResult {
        diagnostics: ignore.apply(diagnostics),
        max_warning,
        fixed_files: Vec::new(),
    }
}

impl LintResult {
    pub fn count(&self, rule: Rule) -> usize {
        self.diagnostics.iter().filter(|d| d.rule == rule).count()
    }

    pub fn has(&self, rule: Rule) -> bool {
        self.diagnostics.iter().any(|d| d.rule == rule)
    }

    pub fn of_rule(&self, rule: Rule) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.rule == rule)
    }

    pub fn error_count(&self) -> usize {
        self.severity_count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.severity_count(Severity::Warning)
    }

    fn severity_count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn has_error(&self) -> bool {
        self.error_count() > 0
    }

    /// More warnings than the budget allows. A budget of 0 fails on any
    /// warning.
    pub fn is_full_of_warning(&self) -> bool {
        self.warning_count() > self.max_warning
    }

    pub fn max_count_warning(&self) -> usize {
        self.max_warning
    }

    pub fn passed(&self) -> bool {
        !self.has_error() && !self.is_full_of_warning()
    }
}

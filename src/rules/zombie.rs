//! Zombie key detection rule.
//!
//! Detects keys declared in a language file but never referenced by any view.

use std::collections::HashSet;

use super::{Checker, RuleContext};
use crate::{
    core::data::LanguageFile,
    issues::{Diagnostic, Location, Rule, Severity},
};

#[derive(Debug, Clone)]
pub struct ZombieRule {
    severity: Severity,
}

impl ZombieRule {
    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Checker for ZombieRule {
    fn rule(&self) -> Rule {
        Rule::ZombieKeys
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        check_zombie_keys(ctx.used_keys, ctx.repository.files(), self.severity)
    }
}

/// One diagnostic per declaring file for every key no view references,
/// in file order then key order.
pub fn check_zombie_keys(
    used_keys: &HashSet<String>,
    files: &[LanguageFile],
    severity: Severity,
) -> Vec<Diagnostic> {
    files
        .iter()
        .flat_map(|file| {
            file.entries()
                .iter()
                .filter(|entry| !used_keys.contains(&entry.key))
                .map(|entry| {
                    Diagnostic::new(&entry.key, Rule::ZombieKeys, severity, &file.path)
                        .with_location(Some(Location::new(entry.line, 1)))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeyRepository, data::SourceFile};
    use pretty_assertions::assert_eq;

    fn files() -> Vec<LanguageFile> {
        KeyRepository::load(&[
            SourceFile::new("en.json", r#"{"A": "a", "B": "b", "C": "c"}"#),
            SourceFile::new("de.json", r#"{"B": "b", "D": "d"}"#),
        ])
        .unwrap()
        .files()
        .to_vec()
    }

    fn used(keys: &[&str]) -> HashSet<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    fn summary(diagnostics: &[Diagnostic]) -> Vec<(String, String)> {
        diagnostics
            .iter()
            .map(|d| (d.key.clone(), d.source_file.clone()))
            .collect()
    }

    #[test]
    fn test_none_unused() {
        let issues = check_zombie_keys(&used(&["A", "B", "C", "D"]), &files(), Severity::Warning);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_one_per_declaring_file() {
        let issues = check_zombie_keys(&used(&["A", "C", "D"]), &files(), Severity::Warning);
        assert_eq!(
            summary(&issues),
            vec![
                ("B".to_string(), "en.json".to_string()),
                ("B".to_string(), "de.json".to_string()),
            ]
        );
    }

    #[test]
    fn test_file_then_key_order() {
        let issues = check_zombie_keys(&used(&[]), &files(), Severity::Error);
        assert_eq!(
            summary(&issues),
            vec![
                ("A".to_string(), "en.json".to_string()),
                ("B".to_string(), "en.json".to_string()),
                ("C".to_string(), "en.json".to_string()),
                ("B".to_string(), "de.json".to_string()),
                ("D".to_string(), "de.json".to_string()),
            ]
        );
        assert!(issues.iter().all(|d| d.severity == Severity::Error));
        assert!(issues.iter().all(|d| d.related_files.is_empty()));
    }
}

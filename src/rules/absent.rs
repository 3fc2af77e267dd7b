//! Absent key detection rule.
//!
//! Detects keys referenced by a view but missing from one or more language
//! files. A key missing from every language file is reported the same way;
//! only `related_files` differs. With no language files at all every view
//! key is reported, with empty `related_files`.

use super::{Checker, RuleContext};
use crate::{
    core::{KeyRepository, data::ViewFile},
    issues::{Diagnostic, Location, Rule, Severity},
};

#[derive(Debug, Clone)]
pub struct AbsentViewKeysRule {
    severity: Severity,
}

impl AbsentViewKeysRule {
    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Checker for AbsentViewKeysRule {
    fn rule(&self) -> Rule {
        Rule::KeysOnViews
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        check_absent_view_keys(ctx.views, ctx.repository, self.severity)
    }
}

/// One diagnostic per view file referencing a key that some language file
/// lacks. `related_files` lists those language files.
pub fn check_absent_view_keys(
    views: &[ViewFile],
    repository: &KeyRepository,
    severity: Severity,
) -> Vec<Diagnostic> {
    let mut issues = Vec::new();

    for view in views {
        for key in view.key_names() {
            let missing_in = repository.files_missing(key);
            if missing_in.is_empty() && repository.contains(key) {
                continue;
            }

            let occurrence = view.first_occurrence(key);
            issues.push(
                Diagnostic::new(key, Rule::KeysOnViews, severity, &view.path)
                    .with_related_files(missing_in)
                    .with_location(occurrence.map(|o| Location::new(o.line, o.col)))
                    .with_source_line(occurrence.map(|o| o.source_line.clone())),
            );
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::{KeyOccurrence, SourceFile};
    use pretty_assertions::assert_eq;

    fn repository() -> KeyRepository {
        KeyRepository::load(&[
            SourceFile::new("en.json", r#"{"ALL": "x", "ONLY_EN": "y"}"#),
            SourceFile::new("de.json", r#"{"ALL": "x"}"#),
        ])
        .unwrap()
    }

    fn view(path: &str, keys: &[(&str, usize)]) -> ViewFile {
        let mut view = ViewFile::new(path);
        view.occurrences = keys
            .iter()
            .map(|(key, line)| KeyOccurrence {
                key: key.to_string(),
                line: *line,
                col: 3,
                source_line: format!("line {}", line),
            })
            .collect();
        view
    }

    #[test]
    fn test_key_in_all_files_is_fine() {
        let issues =
            check_absent_view_keys(&[view("a.html", &[("ALL", 1)])], &repository(), Severity::Error);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_partially_declared_key() {
        let issues = check_absent_view_keys(
            &[view("a.html", &[("ONLY_EN", 4)])],
            &repository(),
            Severity::Error,
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key, "ONLY_EN");
        assert_eq!(issues[0].source_file, "a.html");
        assert_eq!(issues[0].related_files, vec!["de.json"]);
        assert_eq!(issues[0].location, Some(Location::new(4, 3)));
        assert_eq!(issues[0].source_line.as_deref(), Some("line 4"));
    }

    #[test]
    fn test_fully_absent_key_lists_all_files() {
        let issues = check_absent_view_keys(
            &[view("a.html", &[("MISSING.KEY", 1)])],
            &repository(),
            Severity::Error,
        );
        assert_eq!(issues[0].related_files, vec!["en.json", "de.json"]);
    }

    #[test]
    fn test_no_language_files_reports_every_key() {
        let issues = check_absent_view_keys(
            &[view("a.html", &[("MISSING.KEY", 1)])],
            &KeyRepository::default(),
            Severity::Error,
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key, "MISSING.KEY");
        assert!(issues[0].related_files.is_empty());
    }

    #[test]
    fn test_one_diagnostic_per_view_file() {
        let issues = check_absent_view_keys(
            &[
                view("a.html", &[("MISSING", 1), ("MISSING", 7)]),
                view("b.html", &[("MISSING", 2)]),
            ],
            &repository(),
            Severity::Warning,
        );
        let files: Vec<&str> = issues.iter().map(|d| d.source_file.as_str()).collect();
        assert_eq!(files, vec!["a.html", "b.html"]);
        assert_eq!(issues[0].location.unwrap().line, 1);
    }
}

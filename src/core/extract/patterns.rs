//! Key extraction pattern fragments.
//!
//! Each fragment is a standalone regular expression whose first participating
//! capture group (or, lacking groups, the whole match) is the key name.

use std::fmt;

/// Name of the capture group that wraps the declared-key alternation.
pub(crate) const DECLARED_GROUP: &str = "declared";

/// The built-in ways a view references a translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinPattern {
    /// Key as the content of an element carrying a bare `translate`
    /// attribute: `<span translate>HOME.TITLE</span>`.
    DirectiveContent,
    /// Key as the value of a `translate` attribute:
    /// `<span translate="HOME.TITLE">` or `[translate]="'HOME.TITLE'"`.
    DirectiveAttribute,
    /// Quoted key piped through the translate filter, possibly after other
    /// pipes: `{{ 'HOME.TITLE' | translate }}`, `'A.B' | async | translate`.
    Pipe,
}

impl BuiltinPattern {
    pub const ALL: [BuiltinPattern; 3] = [
        BuiltinPattern::DirectiveContent,
        BuiltinPattern::DirectiveAttribute,
        BuiltinPattern::Pipe,
    ];

    pub fn source(self) -> &'static str {
        match self {
            BuiltinPattern::DirectiveContent => {
                r#"<[^<>]*?\s(?:translate|TRANSLATE)(?:\s[^<>]*)?>\s*([A-Za-z0-9_.\-]+)\s*</"#
            }
            BuiltinPattern::DirectiveAttribute => {
                r#"(?:\[translate\]|\btranslate)=["']{1,2}([A-Za-z0-9_.\-]+)["']{1,2}"#
            }
            BuiltinPattern::Pipe => {
                r#"['"]([A-Za-z0-9_.\-]+)['"]\s*(?:\|\s*\w+\s*(?::[^|}'"]*)?)*?\|\s*translate\b"#
            }
        }
    }
}

/// One branch of the composed extraction pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternFragment {
    /// Literal declared key names (deep search). Matches are only accepted
    /// when not surrounded by word characters, dots or dashes.
    DeclaredKeys(Vec<String>),
    Builtin(BuiltinPattern),
    /// User-supplied pattern, appended after the built-ins.
    Custom(String),
}

impl PatternFragment {
    /// Regular expression source for this fragment alone.
    pub fn source(&self) -> String {
        match self {
            PatternFragment::DeclaredKeys(keys) => {
                let mut sorted: Vec<&String> = keys.iter().filter(|k| !k.is_empty()).collect();
                // Longest first so a key never shadows a longer key it prefixes.
                sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
                sorted.dedup();
                let alternation = sorted
                    .iter()
                    .map(|key| regex::escape(key))
                    .collect::<Vec<_>>()
                    .join("|");
                format!("(?P<{}>{})", DECLARED_GROUP, alternation)
            }
            PatternFragment::Builtin(builtin) => builtin.source().to_string(),
            PatternFragment::Custom(pattern) => strip_regex_literal(pattern).to_string(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            PatternFragment::DeclaredKeys(keys) => keys.iter().all(String::is_empty),
            PatternFragment::Builtin(_) => false,
            PatternFragment::Custom(pattern) => strip_regex_literal(pattern).is_empty(),
        }
    }
}

impl fmt::Display for PatternFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternFragment::DeclaredKeys(keys) => write!(f, "<{} declared keys>", keys.len()),
            PatternFragment::Builtin(builtin) => write!(f, "<builtin {:?}>", builtin),
            PatternFragment::Custom(pattern) => write!(f, "{}", pattern),
        }
    }
}

/// Compose fragments in their fixed order: declared keys (deep search only),
/// the built-ins, then custom patterns. Empty fragments are dropped.
pub fn compose_fragments(
    declared_keys: &[&str],
    custom_patterns: &[String],
    deep_search: bool,
) -> Vec<PatternFragment> {
    let mut fragments = Vec::new();

    if deep_search {
        fragments.push(PatternFragment::DeclaredKeys(
            declared_keys.iter().map(|k| k.to_string()).collect(),
        ));
    }
    fragments.extend(BuiltinPattern::ALL.map(PatternFragment::Builtin));
    fragments.extend(custom_patterns.iter().cloned().map(PatternFragment::Custom));

    fragments.retain(|f| !f.is_empty());
    fragments
}

/// Accept JavaScript-style literals such as `/marker\("(.*)"\)/gm`.
fn strip_regex_literal(pattern: &str) -> &str {
    let Some(rest) = pattern.strip_prefix('/') else {
        return pattern;
    };
    match rest.rfind('/') {
        Some(end) if rest[end + 1..].chars().all(|c| "gimsuy".contains(c)) => &rest[..end],
        _ => pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_order_with_deep_search() {
        let fragments = compose_fragments(&["A.B"], &["custom".to_string()], true);
        assert_eq!(fragments.len(), 5);
        assert!(matches!(fragments[0], PatternFragment::DeclaredKeys(_)));
        assert_eq!(
            fragments[1],
            PatternFragment::Builtin(BuiltinPattern::DirectiveContent)
        );
        assert_eq!(fragments[4], PatternFragment::Custom("custom".to_string()));
    }

    #[test]
    fn test_compose_without_deep_search() {
        let fragments = compose_fragments(&["A.B"], &[], false);
        assert_eq!(fragments.len(), 3);
        assert!(
            fragments
                .iter()
                .all(|f| matches!(f, PatternFragment::Builtin(_)))
        );
    }

    #[test]
    fn test_compose_drops_empty_fragments() {
        let fragments = compose_fragments(&[], &[String::new()], true);
        assert_eq!(fragments.len(), 3);
    }

    #[test]
    fn test_declared_keys_escaped_longest_first() {
        let fragment =
            PatternFragment::DeclaredKeys(vec!["A.B".to_string(), "A.B.C".to_string()]);
        assert_eq!(fragment.source(), r"(?P<declared>A\.B\.C|A\.B)");
    }

    #[test]
    fn test_strip_regex_literal() {
        assert_eq!(strip_regex_literal(r#"/marker\("(.*)"\)/gm"#), r#"marker\("(.*)"\)"#);
        assert_eq!(strip_regex_literal("/a/b"), "/a/b");
        assert_eq!(strip_regex_literal("plain"), "plain");
    }
}

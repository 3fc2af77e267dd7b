//! Diagnostic types produced by the rule engine.
//!
//! A [`Diagnostic`] is immutable once created. It carries everything the
//! reporters need (key, rule, severity, file, related files, suggestions)
//! and everything fix mode needs (the declaring file of a zombie key).

use std::fmt;

use serde::Serialize;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each diagnostic kind.
///
/// Variant order is the order in which rules are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    /// Declared in a language file but never referenced by a view.
    ZombieKeys,
    /// Referenced by a view but missing from one or more language files.
    KeysOnViews,
    /// Zombie or absent key that closely resembles a declared key.
    MisprintKeys,
    /// Declared with an empty (or whitespace-only) value.
    EmptyKeys,
}

impl Rule {
    pub const ALL: [Rule; 4] = [
        Rule::ZombieKeys,
        Rule::KeysOnViews,
        Rule::MisprintKeys,
        Rule::EmptyKeys,
    ];
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::ZombieKeys => write!(f, "zombie-key"),
            Rule::KeysOnViews => write!(f, "key-on-view"),
            Rule::MisprintKeys => write!(f, "misprint-key"),
            Rule::EmptyKeys => write!(f, "empty-key"),
        }
    }
}

// ============================================================
// Location
// ============================================================

/// 1-based line and column of a key inside a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl Location {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

// ============================================================
// Diagnostic
// ============================================================

/// A single finding of the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// The translation key the finding is about.
    pub key: String,
    pub rule: Rule,
    pub severity: Severity,
    /// Language file for zombie/empty findings, view file for absent ones.
    pub source_file: String,
    /// Language files lacking the key (absent and misprint findings).
    pub related_files: Vec<String>,
    /// Declared keys the key probably meant (misprint findings).
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_line: Option<String>,
}

impl Diagnostic {
    pub fn new(
        key: impl Into<String>,
        rule: Rule,
        severity: Severity,
        source_file: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            rule,
            severity,
            source_file: source_file.into(),
            related_files: Vec::new(),
            suggestions: Vec::new(),
            location: None,
            source_line: None,
        }
    }

    pub fn with_related_files(mut self, related_files: Vec<String>) -> Self {
        self.related_files = related_files;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }

    pub fn with_source_line(mut self, source_line: Option<String>) -> Self {
        self.source_line = source_line;
        self
    }

    /// Human-readable detail line for reporters.
    pub fn details(&self) -> Option<String> {
        match self.rule {
            Rule::ZombieKeys => Some("not used in any view".to_string()),
            Rule::KeysOnViews if self.related_files.is_empty() => {
                Some("no language file declares it".to_string())
            }
            Rule::KeysOnViews => Some(format!("missing in: {}", self.related_files.join(", "))),
            Rule::MisprintKeys => Some(format!("did you mean: {}", self.suggestions.join(", "))),
            Rule::EmptyKeys => Some("value is empty".to_string()),
        }
    }
}

//! Key extraction from view files.
//!
//! Keys are located lexically: every [`PatternFragment`] is compiled into one
//! multi-line alternation and matched over the raw file content. This is not
//! a template parser; nested quoting and attributes spanning several lines
//! are not supported.
//!
//! ## Module Structure
//!
//! - `patterns`: Built-in and user pattern fragments and their composition

pub mod patterns;

use regex::{Captures, Regex, RegexBuilder};

use crate::core::LintError;

pub use patterns::{BuiltinPattern, PatternFragment, compose_fragments};
use patterns::DECLARED_GROUP;

/// Deep search over large key sets produces big automata.
const REGEX_SIZE_LIMIT: usize = 256 * 1024 * 1024;

/// A key found in content, with the byte offset where the key starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedKey {
    pub key: String,
    pub offset: usize,
}

/// The compiled alternation of all pattern fragments.
#[derive(Debug, Clone)]
pub struct KeyPattern {
    regex: Option<Regex>,
    fragment_count: usize,
}

/// Compile fragments into a single case-sensitive, multi-line pattern.
///
/// Each fragment is validated on its own first so the error names the
/// offending pattern.
pub fn compile(fragments: &[PatternFragment]) -> Result<KeyPattern, LintError> {
    let mut branches = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let source = fragment.source();
        build_regex(&source).map_err(|e| LintError::pattern(fragment.to_string(), e))?;
        branches.push(format!("(?:{})", source));
    }

    let regex = if branches.is_empty() {
        None
    } else {
        let combined = branches.join("|");
        Some(build_regex(&combined).map_err(|e| LintError::pattern(combined.clone(), e))?)
    };

    Ok(KeyPattern {
        regex,
        fragment_count: fragments.len(),
    })
}

fn build_regex(source: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(source)
        .multi_line(true)
        .size_limit(REGEX_SIZE_LIMIT)
        .dfa_size_limit(REGEX_SIZE_LIMIT)
        .build()
}

impl KeyPattern {
    pub fn fragment_count(&self) -> usize {
        self.fragment_count
    }

    /// Every key occurrence in `content`, in order. Duplicates are kept.
    pub fn extract(&self, content: &str) -> Vec<ExtractedKey> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };
        regex
            .captures_iter(content)
            .filter_map(|caps| key_from_captures(&caps, content))
            .collect()
    }
}

fn key_from_captures(caps: &Captures<'_>, content: &str) -> Option<ExtractedKey> {
    if let Some(declared) = caps.name(DECLARED_GROUP) {
        let before = content[..declared.start()].chars().next_back();
        let after = content[declared.end()..].chars().next();
        if before.is_some_and(is_key_char) || after.is_some_and(is_key_char) {
            return None;
        }
        return Some(ExtractedKey {
            key: declared.as_str().to_string(),
            offset: declared.start(),
        });
    }

    let found = caps
        .iter()
        .skip(1)
        .flatten()
        .find(|m| !m.as_str().is_empty())
        .or_else(|| caps.get(0).filter(|m| !m.as_str().is_empty()))?;

    Some(ExtractedKey {
        key: found.as_str().to_string(),
        offset: found.start(),
    })
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.' || c == '-'
}

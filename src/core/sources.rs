//! File resolution and reading.
//!
//! A path is resolved one of three ways:
//! - a directory is walked recursively for files with the wanted extensions
//! - a file is taken as-is
//! - a glob is expanded, after `{a,b}` brace expansion
//!
//! Ignore entries are literal paths (prefix match) or globs.

use std::{
    collections::BTreeSet,
    fs,
    path::{Component, Path, PathBuf},
};

use glob::{Pattern, glob};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::{LintError, data::SourceFile};

pub const VIEW_EXTENSIONS: &[&str] = &["html", "ts"];
pub const LANGUAGE_EXTENSIONS: &[&str] = &["json"];

/// Check if a pattern contains glob wildcards (* or ?).
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Expand `{a,b}` alternatives. Nested braces expand recursively.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };

    let mut depth = 0;
    let mut close = None;
    let mut splits = Vec::new();
    for (i, c) in pattern[open..].char_indices() {
        let at = open + i;
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(at);
                    break;
                }
            }
            ',' if depth == 1 => splits.push(at),
            _ => {}
        }
    }

    let Some(close) = close else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    let mut bounds = vec![open];
    bounds.extend(splits);
    bounds.push(close);

    bounds
        .windows(2)
        .flat_map(|w| expand_braces(&format!("{}{}{}", prefix, &pattern[w[0] + 1..w[1]], suffix)))
        .collect()
}

/// Drop `.` components so `./src/a.html` and `src/a.html` compare equal.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Ignore entries compiled for matching.
struct IgnoreSet {
    literal: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(ignores: &[String]) -> Result<Self, LintError> {
        let mut literal = Vec::new();
        let mut globs = Vec::new();

        for entry in ignores.iter().flat_map(|i| expand_braces(i)) {
            if is_glob_pattern(&entry) {
                let normalized = normalize(Path::new(&entry));
                let source = normalized.to_string_lossy();
                let pattern = Pattern::new(&source).map_err(|e| LintError::Glob {
                    pattern: entry.clone(),
                    source: e,
                })?;
                globs.push(pattern);
            } else {
                literal.push(normalize(Path::new(&entry)));
            }
        }

        Ok(Self { literal, globs })
    }

    fn is_ignored(&self, path: &Path) -> bool {
        self.literal.iter().any(|ignored| path.starts_with(ignored))
            || self.globs.iter().any(|p| p.matches_path(path))
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.contains(&e))
}

/// Resolve `pattern` to a sorted, de-duplicated list of files.
pub fn resolve_files(
    pattern: &str,
    ignores: &[String],
    extensions: &[&str],
) -> Result<Vec<PathBuf>, LintError> {
    let ignore = IgnoreSet::new(ignores)?;
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();

    let mut add = |path: &Path| {
        let path = normalize(path);
        if !ignore.is_ignored(&path) {
            files.insert(path);
        }
    };

    for expanded in expand_braces(pattern) {
        let mut roots: Vec<PathBuf> = Vec::new();

        if is_glob_pattern(&expanded) {
            let entries = glob(&expanded).map_err(|e| LintError::Glob {
                pattern: expanded.clone(),
                source: e,
            })?;
            for entry in entries {
                match entry {
                    Ok(path) => roots.push(path),
                    Err(e) => warn!(
                        path = %e.path().display(),
                        error = %e.error(),
                        "skipping unreadable path"
                    ),
                }
            }
        } else {
            let path = PathBuf::from(&expanded);
            if path.exists() {
                roots.push(path);
            } else {
                warn!(path = %expanded, "path does not exist");
            }
        }

        for root in roots {
            if root.is_file() {
                add(&root);
                continue;
            }
            for entry in WalkDir::new(&root).into_iter() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!(error = %e, "skipping unreadable path");
                        continue;
                    }
                };
                let path = entry.path();
                if path.is_file() && has_extension(path, extensions) {
                    add(path);
                }
            }
        }
    }

    debug!(pattern, count = files.len(), "resolved files");
    Ok(files.into_iter().collect())
}

/// Read each path into memory.
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<SourceFile>, LintError> {
    paths
        .iter()
        .map(|path| {
            let content = fs::read_to_string(path).map_err(|e| LintError::io(path, e))?;
            Ok(SourceFile::new(path.to_string_lossy(), content))
        })
        .collect()
}

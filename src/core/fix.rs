//! Fix mode: remove zombie keys from the language files that declare them.
//!
//! Planning is pure; writing is a separate step. Each language file is
//! rewritten at most once per run, with all of its zombie keys removed
//! together. A file whose serialized content would not change is left
//! alone, so a second run writes nothing.

use std::path::Path;

use tracing::{debug, info};

use crate::{
    core::{LintError, data::SourceFile},
    issues::{Diagnostic, Rule},
    json_editor::JsonEditor,
};

/// New content for one language file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRewrite {
    pub path: String,
    pub content: String,
}

/// Zombie keys grouped by declaring file, files in first-appearance order.
pub fn zombie_keys_by_file(diagnostics: &[Diagnostic]) -> Vec<(&str, Vec<&str>)> {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();

    for d in diagnostics.iter().filter(|d| d.rule == Rule::ZombieKeys) {
        match groups.iter_mut().find(|(path, _)| *path == d.source_file) {
            Some((_, keys)) => keys.push(d.key.as_str()),
            None => groups.push((d.source_file.as_str(), vec![d.key.as_str()])),
        }
    }

    groups
}

/// Compute the rewrites that remove every zombie key.
///
/// `languages` supplies the current content of each file; a zombie
/// diagnostic naming a file outside it is skipped.
pub fn plan_fix(
    diagnostics: &[Diagnostic],
    languages: &[SourceFile],
) -> Result<Vec<FileRewrite>, LintError> {
    let mut rewrites = Vec::new();

    for (path, keys) in zombie_keys_by_file(diagnostics) {
        let Some(source) = languages.iter().find(|s| s.path == path) else {
            debug!(path, "zombie keys for unknown file, skipping");
            continue;
        };

        let mut editor = JsonEditor::from_content(Path::new(path), source.content.clone())?;
        editor.delete_keys(&keys);
        if editor.is_modified()? {
            rewrites.push(FileRewrite {
                path: path.to_string(),
                content: editor.content()?,
            });
        }
    }

    Ok(rewrites)
}

/// Persist planned rewrites. Returns the paths written.
pub fn write_fixes(rewrites: &[FileRewrite]) -> Result<Vec<String>, LintError> {
    let mut written = Vec::with_capacity(rewrites.len());
    for rewrite in rewrites {
        std::fs::write(&rewrite.path, &rewrite.content)
            .map_err(|e| LintError::io(&rewrite.path, e))?;
        info!(path = %rewrite.path, "removed zombie keys");
        written.push(rewrite.path.clone());
    }
    Ok(written)
}

//! Key repository: the declared-key universe of a lint run.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::core::{
    LintError,
    data::{Declaration, Key, LanguageFile, SourceFile},
    parsers::json::parse_language_file,
};

/// All language files of a run, indexed by key name.
#[derive(Debug, Default)]
pub struct KeyRepository {
    files: Vec<LanguageFile>,
}

impl KeyRepository {
    /// Parse every language file.
    ///
    /// Any invalid file aborts the load: the rules rely on a consistent key
    /// universe, so a partial repository is never returned.
    pub fn load(sources: &[SourceFile]) -> Result<Self, LintError> {
        let files = sources
            .iter()
            .map(parse_language_file)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            files = files.len(),
            keys = files.iter().map(LanguageFile::len).sum::<usize>(),
            "loaded language files"
        );
        Ok(Self { files })
    }

    pub fn files(&self) -> &[LanguageFile] {
        &self.files
    }

    /// Whether any language file declares `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.files.iter().any(|f| f.contains(key))
    }

    /// Paths of the language files that do not declare `key`, in load order.
    pub fn files_missing(&self, key: &str) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| !f.contains(key))
            .map(|f| f.path.clone())
            .collect()
    }

    /// Distinct declared key names in first-declaration order.
    pub fn key_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.files
            .iter()
            .flat_map(|f| f.entries().iter().map(|e| e.key.as_str()))
            .filter(|key| seen.insert(*key))
            .collect()
    }

    /// Merge same-named keys across files, recording every declaring file.
    ///
    /// View locations are left empty for the caller to attach.
    pub fn keys_with_values(&self) -> Vec<Key> {
        let mut keys: Vec<Key> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for file in &self.files {
            for entry in file.entries() {
                let pos = *index.entry(entry.key.as_str()).or_insert_with(|| {
                    keys.push(Key::new(&entry.key));
                    keys.len() - 1
                });
                keys[pos].declarations.push(Declaration {
                    file_path: file.path.clone(),
                    language: file.name.clone(),
                    value: entry.value.clone(),
                    line: entry.line,
                });
            }
        }

        keys
    }
}

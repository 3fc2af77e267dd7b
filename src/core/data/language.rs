use std::collections::HashMap;

/// A single flattened key of a language file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Dot-delimited key path (e.g. "HOME.TITLE").
    pub key: String,
    pub value: String,
    /// 1-based line of the key in the JSON source.
    pub line: usize,
}

/// A parsed language file: its path and its keys in declaration order.
#[derive(Debug, Clone, Default)]
pub struct LanguageFile {
    pub path: String,
    /// File stem, e.g. "en" for "i18n/en.json".
    pub name: String,
    entries: Vec<LanguageEntry>,
    index: HashMap<String, usize>,
}

impl LanguageFile {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an entry. A later entry with the same key replaces the value
    /// but keeps the original position.
    pub fn insert(&mut self, entry: LanguageEntry) {
        match self.index.get(&entry.key) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&LanguageEntry> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

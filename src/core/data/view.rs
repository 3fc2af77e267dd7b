use std::collections::HashSet;

/// One occurrence of a key inside a view file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOccurrence {
    pub key: String,
    pub line: usize,
    pub col: usize,
    pub source_line: String,
}

/// Keys referenced by a single view file.
///
/// Every occurrence is kept for location reporting; [`ViewFile::key_names`]
/// yields each key once.
#[derive(Debug, Clone, Default)]
pub struct ViewFile {
    pub path: String,
    pub occurrences: Vec<KeyOccurrence>,
}

impl ViewFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            occurrences: Vec::new(),
        }
    }

    /// Distinct key names in order of first occurrence.
    pub fn key_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.occurrences
            .iter()
            .map(|o| o.key.as_str())
            .filter(|key| seen.insert(*key))
            .collect()
    }

    pub fn first_occurrence(&self, key: &str) -> Option<&KeyOccurrence> {
        self.occurrences.iter().find(|o| o.key == key)
    }

    pub fn references(&self, key: &str) -> bool {
        self.occurrences.iter().any(|o| o.key == key)
    }
}

use serde::Serialize;

/// One language file's declaration of a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub file_path: String,
    /// Language name (file stem) of the declaring file.
    pub language: String,
    pub value: String,
    pub line: usize,
}

/// A key merged across every language file that declares it.
///
/// There is one `Key` per distinct name within a lint run. View locations
/// are empty until the rule layer attaches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    pub name: String,
    pub declarations: Vec<Declaration>,
    pub view_locations: Vec<String>,
}

impl Key {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
            view_locations: Vec::new(),
        }
    }

    /// Value from the first declaring file.
    pub fn value(&self) -> Option<&str> {
        self.declarations.first().map(|d| d.value.as_str())
    }

    /// Paths of the declaring language files, in load order.
    pub fn declaring_files(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|d| d.file_path.as_str())
    }
}

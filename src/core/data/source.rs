use std::path::Path;

/// A resolved file path together with its raw textual content.
///
/// The core never reads files itself; callers resolve and read them first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// File name without extension (e.g. "EN-us" for "i18n/EN-us.json").
    pub fn stem(&self) -> String {
        Path::new(&self.path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.path)
            .to_string()
    }
}

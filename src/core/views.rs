//! View scanning: turn raw view content into referenced keys with locations.

use crate::core::{
    data::{KeyOccurrence, SourceFile, ViewFile},
    extract::KeyPattern,
    utils::LineIndex,
};

/// Scan one view file with the composed extraction pattern.
pub fn scan_view(source: &SourceFile, pattern: &KeyPattern) -> ViewFile {
    let line_index = LineIndex::new(&source.content);
    let mut view = ViewFile::new(&source.path);

    for found in pattern.extract(&source.content) {
        let (line, col) = line_index.line_col(&source.content, found.offset);
        let source_line = line_index
            .line_text(&source.content, line)
            .unwrap_or_default()
            .to_string();
        view.occurrences.push(KeyOccurrence {
            key: found.key,
            line,
            col,
            source_line,
        });
    }

    view
}

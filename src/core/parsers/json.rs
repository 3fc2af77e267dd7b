use std::path::Path;

use serde_json::Value;

use crate::core::{
    LintError,
    data::{LanguageEntry, LanguageFile, SourceFile},
    utils::LineIndex,
};

/// Parse a language file into a flat `key -> value` table.
///
/// Nested objects become dot paths (`{"A": {"B": "x"}}` -> `A.B`).
/// Scalars other than strings are stored in their JSON text form, `null`
/// as an empty value.
pub fn parse_language_file(source: &SourceFile) -> Result<LanguageFile, LintError> {
    let json: Value = serde_json::from_str(&source.content)
        .map_err(|e| LintError::json(Path::new(&source.path), e))?;

    let line_index = LineIndex::new(&source.content);
    let mut file = LanguageFile::new(&source.path, source.stem());
    flatten_json(&json, String::new(), &source.content, &line_index, &mut file);
    Ok(file)
}

/// Find the line number where a key appears in the JSON content.
///
/// A key literally containing dots (`"A.B": ...`) is looked up first. Otherwise
/// each key part is searched in sequence so `Common.submit` finds the
/// `"submit"` that comes after `"Common"`, not one in another namespace.
/// A match only counts when followed by `:`, so string values are skipped.
fn find_key_line(content: &str, key_path: &str, line_index: &LineIndex) -> usize {
    if let Some(offset) = find_json_key(content, 0, key_path) {
        return line_index.line(offset);
    }

    let mut search_start = 0;
    for part in key_path.split('.') {
        match find_json_key(content, search_start, part) {
            Some(offset) => search_start = offset,
            None => break,
        }
    }

    if search_start > 0 {
        line_index.line(search_start)
    } else {
        1
    }
}

/// Offset just past `"name"` where it is used as an object key, searching
/// from `from`.
fn find_json_key(content: &str, from: usize, name: &str) -> Option<usize> {
    let pattern = format!("\"{}\"", name);
    let remaining = content.get(from..)?;

    let mut pos = 0;
    while let Some(rel_pos) = remaining[pos..].find(&pattern) {
        let abs_pos = pos + rel_pos;
        let after_pattern = abs_pos + pattern.len();
        if remaining[after_pattern..].trim_start().starts_with(':') {
            return Some(from + after_pattern);
        }
        pos = abs_pos + 1;
    }
    None
}

fn flatten_json(
    value: &Value,
    prefix: String,
    content: &str,
    line_index: &LineIndex,
    result: &mut LanguageFile,
) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, content, line_index, result);
            }
        }
        Value::Array(arr) => {
            if arr.is_empty() || prefix.is_empty() {
                return;
            }

            // String arrays are one translation; anything else is indexed
            // (e.g. FAQ.ITEMS.0.QUESTION).
            if arr.iter().all(Value::is_string) {
                let values: Vec<&str> = arr.iter().filter_map(Value::as_str).collect();
                push_entry(result, prefix, values.join(", "), content, line_index);
            } else {
                for (index, val) in arr.iter().enumerate() {
                    let new_prefix = format!("{}.{}", prefix, index);
                    flatten_json(val, new_prefix, content, line_index, result);
                }
            }
        }
        Value::String(s) => push_entry(result, prefix, s.clone(), content, line_index),
        Value::Null => push_entry(result, prefix, String::new(), content, line_index),
        Value::Bool(_) | Value::Number(_) => {
            push_entry(result, prefix, value.to_string(), content, line_index)
        }
    }
}

fn push_entry(
    result: &mut LanguageFile,
    key: String,
    value: String,
    content: &str,
    line_index: &LineIndex,
) {
    if key.is_empty() {
        return;
    }
    let line = find_key_line(content, &key, line_index);
    result.insert(LanguageEntry { key, value, line });
}

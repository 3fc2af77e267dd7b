use std::{
    cmp::Reverse,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};

use crate::core::LintError;

const INDENT: &[u8] = b"    ";

/// A JSON editor that removes keys from a language file.
///
/// Removal works on values: [`remove_keys`] returns a new document and the
/// editor only swaps it in. Output is pretty-printed with 4-space
/// indentation and a trailing newline.
pub struct JsonEditor {
    file_path: PathBuf,
    original: String,
    value: Value,
}

impl JsonEditor {
    /// Edit content that has already been read from `path`.
    pub fn from_content(path: &Path, content: String) -> Result<Self, LintError> {
        let value = serde_json::from_str(&content).map_err(|e| LintError::json(path, e))?;
        Ok(Self {
            file_path: path.to_path_buf(),
            original: content,
            value,
        })
    }

    /// Remove keys by their dotted names (e.g., "HOME.TITLE").
    pub fn delete_keys(&mut self, keys: &[&str]) {
        self.value = remove_keys(&self.value, keys);
    }

    /// Serialized form of the current document.
    pub fn content(&self) -> Result<String, LintError> {
        to_pretty_string(&self.value).map_err(|e| LintError::json(&self.file_path, e))
    }

    /// Whether saving would change the file.
    pub fn is_modified(&self) -> Result<bool, LintError> {
        Ok(self.content()? != self.original)
    }
}

/// A copy of `value` without `keys`.
///
/// A key is removed both as a literal top-level member (`{"A.B": ..}`) and
/// as a nested path (`{"A": {"B": ..}}`, `{"A": [{"B": ..}]}` for `A.0.B`).
/// Containers emptied by a removal are dropped along the removed path only.
/// An emptied array element is kept as `{}` unless it is the last one, so
/// the indices of its siblings stay valid.
pub fn remove_keys(value: &Value, keys: &[&str]) -> Value {
    let mut result = value.clone();

    // Highest array indices first, so popping an element never shifts a
    // path still to be removed.
    let mut paths: Vec<Vec<&str>> = keys.iter().map(|key| key.split('.').collect()).collect();
    paths.sort_by_cached_key(|parts| {
        Reverse(
            parts
                .iter()
                .map(|part| (part.parse::<usize>().ok(), *part))
                .collect::<Vec<_>>(),
        )
    });

    for key in keys {
        if let Value::Object(map) = &mut result {
            map.shift_remove(*key);
        }
    }
    for parts in &paths {
        delete_path(&mut result, parts);
    }

    result
}

/// Delete `parts` below `value`. Returns whether something was removed.
fn delete_path(value: &mut Value, parts: &[&str]) -> bool {
    let Some((first, rest)) = parts.split_first() else {
        return false;
    };

    match value {
        Value::Object(map) => {
            if rest.is_empty() {
                return map.shift_remove(*first).is_some();
            }
            let Some(child) = map.get_mut(*first) else {
                return false;
            };
            let removed = delete_path(child, rest);
            if removed && is_empty_container(child) {
                map.shift_remove(*first);
            }
            removed
        }
        Value::Array(items) => {
            let Some(index) = first.parse::<usize>().ok().filter(|i| *i < items.len()) else {
                return false;
            };
            let removed = rest.is_empty() || delete_path(&mut items[index], rest);
            if removed && (rest.is_empty() || is_empty_container(&items[index])) {
                if index + 1 == items.len() {
                    items.pop();
                } else {
                    items[index] = Value::Object(Default::default());
                }
            }
            removed
        }
        _ => false,
    }
}

fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Pretty-print with 4-space indentation and a trailing newline.
pub fn to_pretty_string(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

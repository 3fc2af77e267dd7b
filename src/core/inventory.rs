//! Language and key listings.

use serde::Serialize;

use crate::core::{
    KeyRepository,
    data::{Key, ViewFile},
};

/// One language file and the keys it declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSummary {
    pub name: String,
    pub path: String,
    pub keys: Vec<String>,
}

pub fn list_languages(repository: &KeyRepository) -> Vec<LanguageSummary> {
    repository
        .files()
        .iter()
        .map(|file| LanguageSummary {
            name: file.name.clone(),
            path: file.path.clone(),
            keys: file.entries().iter().map(|e| e.key.clone()).collect(),
        })
        .collect()
}

/// Every declared key with its declarations and the views referencing it.
pub fn list_keys(repository: &KeyRepository, views: &[ViewFile]) -> Vec<Key> {
    let mut keys = repository.keys_with_values();
    for key in &mut keys {
        key.view_locations = views
            .iter()
            .filter(|view| view.references(&key.name))
            .map(|view| view.path.clone())
            .collect();
    }
    keys
}

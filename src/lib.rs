//! Keylint - translation key linter
//!
//! Keylint cross-references the keys declared in JSON language files against
//! the keys referenced in view templates. It reports unused ("zombie") keys,
//! keys used on views but missing from some language files, empty values and
//! likely misprints, and can remove zombie keys from the language files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, reporting, exit codes)
//! - `config`: Configuration file loading and layered settings
//! - `core`: Extraction, key repository, aggregation and the lint pipeline
//! - `issues`: Diagnostic type definitions
//! - `json_editor`: Key removal on parsed language files
//! - `rules`: The four rule evaluators

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod json_editor;
pub mod rules;

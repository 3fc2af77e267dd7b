//! Core data types used across the lint pipeline.
//!
//! ## Module Structure
//!
//! - `key`: Merged key entity (declarations across language files, view usages)
//! - `language`: One parsed language file (flattened key/value entries)
//! - `source`: Raw file content handed to the core
//! - `view`: Keys referenced by one view file

pub mod key;
pub mod language;
pub mod source;
pub mod view;

pub use key::{Declaration, Key};
pub use language::{LanguageEntry, LanguageFile};
pub use source::SourceFile;
pub use view::{KeyOccurrence, ViewFile};

//! Core lint engine.
//!
//! The pipeline runs in a fixed order for every lint run:
//!
//! 1. **Load**: language files are parsed into a [`KeyRepository`]
//! 2. **Extract**: view files are scanned with the composed key pattern
//! 3. **Check**: the enabled rules cross-reference declared and used keys
//! 4. **Aggregate**: ignore filtering and pass/fail signals ([`LintResult`])
//! 5. **Fix**: zombie keys are optionally removed from the language files
//!
//! The core works on already-read [`SourceFile`](data::SourceFile)s;
//! `sources` is the only module that touches the filesystem for input.
//!
//! ## Module Structure
//!
//! - `data`: Language files, keys, views and source content
//! - `error`: Fatal error type
//! - `extract`: Pattern fragments and key extraction
//! - `fix`: Zombie key removal
//! - `inventory`: Language and key listings
//! - `linter`: Pipeline orchestration
//! - `parsers`: Language file parsing
//! - `repository`: Declared-key index
//! - `result`: Ignore filtering and result aggregation
//! - `sources`: File resolution and reading
//! - `utils`: Line/column lookups
//! - `views`: View scanning

pub mod data;
pub mod error;
pub mod extract;
pub mod fix;
pub mod inventory;
pub mod linter;
pub mod parsers;
pub mod repository;
pub mod result;
pub mod sources;
pub mod utils;
pub mod views;

pub use error::LintError;
pub use inventory::LanguageSummary;
pub use linter::{LintInput, LintTarget, Linter};
pub use repository::KeyRepository;
pub use result::{IgnoreFilter, LintResult, aggregate};

//! Utility functions and helpers for core analysis.
//!
//! ## Module Structure
//!
//! - `line_index`: Byte offset to line/column lookups

pub mod line_index;

pub use line_index::LineIndex;

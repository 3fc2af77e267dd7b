//! File parsers.
//!
//! - `json`: Language file parser (flattens nested objects into dot paths)

pub mod json;

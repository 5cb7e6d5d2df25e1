//! cjscan_core: Core utilities shared by the cjscan crates.
//!
//! Provides source positions, the lazily-built line map used when reporting
//! errors, and the insertion-ordered collections the lexer accumulates into.

pub mod collections;
pub mod text;

// Re-export commonly used types
pub use collections::OrderedSet;
pub use text::{LineAndColumn, LineMap, TextPos};

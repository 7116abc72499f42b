//! Export module for viewing the recipe graph in external tools.
//!
//! Layout and drawing are left to those tools:
//! - **DOT**: Graphviz (`dot -Tsvg` gives the hierarchical view)
//! - **JSON**: D3.js and other web-based viewers

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::export_json;

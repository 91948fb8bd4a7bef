//! Output formatting for summaries and comparisons.
//!
//! This module provides formatters for the engine's output structures:
//! - Terminal: Human-readable tables with colors and box drawing
//! - JSON: Machine-readable serialization

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_comparison, format_summary, DEFAULT_KINDS};

//! Syntax coloring module
//!
//! This module provides the rule-driven coloring pipeline:
//! - Escaping of HTML special characters
//! - Ordered pattern rules and the color table they map to
//! - The scanning engine that wraps matches in colored spans
//! - TOML schemes bundling rules and colors in one file

mod colors;
mod engine;
mod escape;
mod rules;
mod scheme;

pub use colors::ColorTable;
pub use engine::{colorize, wrap_block, Highlighter, Scanner, Segment};
pub use escape::escape;
pub use rules::{Rule, RuleMatch, RuleSet};
pub use scheme::{Scheme, SchemeRule};

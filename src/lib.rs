//! colorize - rule-driven text to HTML colorizer
//!
//! Text is escaped for HTML, then scanned left to right against an ordered
//! list of regular expression rules. Each match is wrapped in a span
//! colored according to its rule's token name.

pub mod config;
pub mod document;
pub mod error;
pub mod syntax;

pub use error::{ColorizeError, Result};
pub use syntax::{colorize, escape, wrap_block, ColorTable, Highlighter, Rule, RuleSet, Scheme};
